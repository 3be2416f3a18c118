//! sql-column-csv: column metadata from CREATE TABLE DDL
//!
//! This library reads a SQL file, finds its first `CREATE TABLE` statement,
//! collects each column's name and declared type, attaches the text of any
//! `COMMENT ON COLUMN` statements, and writes the result as a CSV file that
//! spreadsheet tools open with the right encoding.

pub mod batch;
pub mod emit;
pub mod error;
pub mod loader;
pub mod logging;
pub mod model;
pub mod parser;
pub mod util;

use std::path::PathBuf;

pub use batch::{discover_jobs, run_batch, BatchReport, ExtractJob, JobFailure};
pub use emit::HeaderLanguage;
pub use error::ColumnCsvError;
pub use model::{ColumnOrder, ColumnRecord, ColumnSet};

/// Options for converting one DDL file
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Path to the SQL file
    pub input_path: PathBuf,
    /// Path of the CSV file to write
    pub output_path: PathBuf,
    /// Row order in the output
    pub order: ColumnOrder,
    /// Language of the header row
    pub header: HeaderLanguage,
}

/// Outcome of a successful conversion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractSummary {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Number of rows written, excluding the header
    pub column_count: usize,
    /// Number of rows with a non-empty comment
    pub comment_count: usize,
}

/// Convert one DDL file into a column CSV
pub fn extract_columns(options: &ExtractOptions) -> Result<ExtractSummary, ColumnCsvError> {
    // Step 1: Load the source
    let sql = loader::read_sql_source(&options.input_path)?;

    // Step 2: Extract declared columns and their comments
    let columns =
        parser::parse_column_set(&sql).ok_or_else(|| ColumnCsvError::NoTableFound {
            path: options.input_path.clone(),
        })?;

    // Step 3: Write the CSV
    emit::write_column_csv(&options.output_path, &columns, options.order, options.header)?;

    let summary = ExtractSummary {
        input_path: options.input_path.clone(),
        output_path: options.output_path.clone(),
        column_count: columns.len(),
        comment_count: columns.commented_count(),
    };

    tracing::info!(
        input = %summary.input_path.display(),
        output = %summary.output_path.display(),
        columns = summary.column_count,
        comments = summary.comment_count,
        "extracted columns"
    );

    Ok(summary)
}
