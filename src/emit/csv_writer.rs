//! CSV writer for extracted columns
//!
//! Output is UTF-8 with a leading byte-order marker so that spreadsheet
//! tools pick the right encoding for non-ASCII names and comments. Records
//! are comma separated, CRLF terminated, and fields are quoted only when
//! they contain a delimiter, quote or line break.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::{csv_to_io, ColumnCsvError};
use crate::model::{ColumnOrder, ColumnSet};

/// UTF-8 byte-order marker written at the start of every output file
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Language of the header row
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HeaderLanguage {
    #[default]
    English,
    Chinese,
}

impl HeaderLanguage {
    /// Labels for the name, type and comment columns
    pub fn labels(self) -> [&'static str; 3] {
        match self {
            HeaderLanguage::English => ["field_name", "type", "comment"],
            HeaderLanguage::Chinese => ["字段名", "类型", "注释"],
        }
    }
}

/// Write the BOM, header and one row per column to `out`
pub fn write_columns<W: Write>(
    mut out: W,
    columns: &ColumnSet,
    order: ColumnOrder,
    header: HeaderLanguage,
) -> std::io::Result<()> {
    out.write_all(UTF8_BOM)?;

    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(out);

    writer.write_record(header.labels()).map_err(csv_to_io)?;
    for record in columns.ordered(order) {
        writer
            .write_record([
                record.name.as_str(),
                record.data_type.as_str(),
                record.comment.as_str(),
            ])
            .map_err(csv_to_io)?;
    }
    writer.flush()
}

/// Write a column CSV file at `path`.
///
/// Any I/O failure is returned as `WriteFailure`; a partially written file is
/// removed.
pub fn write_column_csv(
    path: &Path,
    columns: &ColumnSet,
    order: ColumnOrder,
    header: HeaderLanguage,
) -> Result<(), ColumnCsvError> {
    let to_write_failure = |source: std::io::Error| ColumnCsvError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(to_write_failure)?;
    if let Err(source) = write_columns(file, columns, order, header) {
        let _ = std::fs::remove_file(path);
        return Err(to_write_failure(source));
    }
    Ok(())
}
