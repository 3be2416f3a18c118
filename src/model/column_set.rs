//! Ordered, name-keyed collection of extracted columns

use std::collections::HashMap;

/// One column as declared in the table body, plus its comment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnRecord {
    /// Column name with identifier quotes removed
    pub name: String,
    /// Declared type exactly as written, e.g. "DECIMAL(12,2)"
    pub data_type: String,
    /// Text from a matching COMMENT ON COLUMN statement, empty if none
    pub comment: String,
}

/// Row order used when emitting a column set
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnOrder {
    /// Order of first declaration in the table body
    #[default]
    Declared,
    /// Ascending by column name
    Name,
}

/// Columns keyed by name, remembering first-seen order
#[derive(Debug, Clone, Default)]
pub struct ColumnSet {
    records: Vec<ColumnRecord>,
    index: HashMap<String, usize>,
}

impl ColumnSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a column declaration.
    ///
    /// Redeclaring an existing name replaces its type and clears its comment
    /// but keeps the position of the first declaration.
    pub fn declare(&mut self, name: impl Into<String>, data_type: impl Into<String>) {
        let name = name.into();
        let record = ColumnRecord {
            name: name.clone(),
            data_type: data_type.into(),
            comment: String::new(),
        };
        match self.index.get(&name) {
            Some(&pos) => self.records[pos] = record,
            None => {
                self.index.insert(name, self.records.len());
                self.records.push(record);
            }
        }
    }

    /// Attach a comment to a declared column.
    ///
    /// Returns false, leaving the set untouched, when no column has that name.
    pub fn set_comment(&mut self, name: &str, comment: impl Into<String>) -> bool {
        match self.index.get(name) {
            Some(&pos) => {
                self.records[pos].comment = comment.into();
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&ColumnRecord> {
        self.index.get(name).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of columns that ended up with a non-empty comment
    pub fn commented_count(&self) -> usize {
        self.records.iter().filter(|r| !r.comment.is_empty()).count()
    }

    /// Records in the requested emission order
    pub fn ordered(&self, order: ColumnOrder) -> Vec<&ColumnRecord> {
        let mut rows: Vec<&ColumnRecord> = self.records.iter().collect();
        if order == ColumnOrder::Name {
            rows.sort_by(|a, b| a.name.cmp(&b.name));
        }
        rows
    }
}
