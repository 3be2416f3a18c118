//! Common test utilities for sql-column-csv tests

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use sql_column_csv::emit::UTF8_BOM;
use sql_column_csv::{
    extract_columns, ColumnCsvError, ColumnOrder, ExtractOptions, ExtractSummary, HeaderLanguage,
};

/// Path to a SQL fixture under tests/fixtures
pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Test context with a temporary directory for isolated output
pub struct TestContext {
    /// Kept to prevent temp directory cleanup until TestContext is dropped
    _temp_dir: TempDir,
    pub dir: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            dir,
        }
    }

    /// Write a SQL file into the context directory and return its path
    pub fn write_sql(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::write(&path, content).expect("Failed to write SQL file");
        path
    }

    /// Copy a fixture into the context directory and return its path
    pub fn copy_fixture(&self, name: &str) -> PathBuf {
        let path = self.dir.join(name);
        fs::copy(fixture_path(name), &path).expect("Failed to copy fixture");
        path
    }

    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// Run the extraction for `input`, writing `<output_name>` in the context
    pub fn extract(
        &self,
        input: &Path,
        output_name: &str,
        order: ColumnOrder,
    ) -> Result<ExtractSummary, ColumnCsvError> {
        extract_columns(&ExtractOptions {
            input_path: input.to_path_buf(),
            output_path: self.output_path(output_name),
            order,
            header: HeaderLanguage::English,
        })
    }
}

/// Read a CSV written by the tool, checking for the BOM, returning all rows
/// including the header
pub fn read_csv_rows(path: &Path) -> Vec<Vec<String>> {
    let bytes = fs::read(path).expect("Failed to read CSV output");
    assert!(
        bytes.starts_with(UTF8_BOM),
        "Output {} should start with a UTF-8 BOM",
        path.display()
    );

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(&bytes[UTF8_BOM.len()..]);
    reader
        .records()
        .map(|r| {
            r.expect("Invalid CSV record")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}

/// Shorthand for building an expected row
pub fn row(name: &str, data_type: &str, comment: &str) -> Vec<String> {
    vec![name.to_string(), data_type.to_string(), comment.to_string()]
}
