//! DDL source loading
//!
//! Reads a SQL file into memory. UTF-8 is expected; a leading byte-order
//! marker is dropped, and files exported by Windows tools in Windows-1252 are
//! decoded as a fallback. A UTF-16 byte-order marker on non-UTF-8 input
//! selects UTF-16 instead, and malformed UTF-16 is rejected.

use std::path::Path;

use encoding_rs::WINDOWS_1252;

use crate::error::ColumnCsvError;

const UTF8_BOM: &str = "\u{FEFF}";

/// Read a DDL file, failing with `FileNotFound` when the path does not exist
pub fn read_sql_source(path: &Path) -> Result<String, ColumnCsvError> {
    if !path.exists() {
        return Err(ColumnCsvError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let bytes = std::fs::read(path).map_err(|source| ColumnCsvError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    decode_sql_bytes(bytes).map_err(|source| ColumnCsvError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Decode raw file bytes, trying UTF-8 first, then Windows-1252 (or UTF-16
/// when a UTF-16 byte-order marker is present)
fn decode_sql_bytes(bytes: Vec<u8>) -> std::io::Result<String> {
    match String::from_utf8(bytes) {
        Ok(s) => Ok(match s.strip_prefix(UTF8_BOM) {
            Some(stripped) => stripped.to_string(),
            None => s,
        }),
        Err(err) => {
            let bytes = err.into_bytes();
            let (decoded, encoding, had_errors) = WINDOWS_1252.decode(&bytes);
            if had_errors {
                Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("File is not valid UTF-8 or {}", encoding.name()),
                ))
            } else {
                tracing::debug!(encoding = encoding.name(), "input is not UTF-8");
                Ok(decoded.into_owned())
            }
        }
    }
}
