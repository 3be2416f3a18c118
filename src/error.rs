//! Error types for sql-column-csv

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while turning a DDL file into a column CSV
#[derive(Error, Debug)]
pub enum ColumnCsvError {
    #[error("Input file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to read input file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No CREATE TABLE statement found in {path}")]
    NoTableFound { path: PathBuf },

    #[error("Failed to write column CSV to {path}")]
    WriteFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No input files matched the given sources")]
    NoInputs,
}

impl ColumnCsvError {
    /// Render the error together with its source chain on one line.
    pub fn report(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        message
    }
}

/// Unwrap the I/O error behind a csv writer failure.
pub(crate) fn csv_to_io(err: csv::Error) -> std::io::Error {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => io,
        other => std::io::Error::other(format!("{:?}", other)),
    }
}
