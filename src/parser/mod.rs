//! DDL text extraction

mod comment_parser;
mod scanner;
mod table_parser;

pub use comment_parser::{apply_column_comments, extract_column_comments, ColumnComment};
pub use scanner::CodeBytes;
pub use table_parser::{
    find_table_body, is_constraint_line, parse_column_declaration, parse_table_columns,
    split_declarations, ParsedColumn,
};

use crate::model::ColumnSet;

/// Extract the commented column set of the first CREATE TABLE in `sql`.
///
/// Returns `None` when no terminated CREATE TABLE statement is found.
pub fn parse_column_set(sql: &str) -> Option<ColumnSet> {
    let body = find_table_body(sql)?;
    let mut columns = parse_table_columns(body);
    let comments = extract_column_comments(sql);
    apply_column_comments(&mut columns, &comments);
    Some(columns)
}
