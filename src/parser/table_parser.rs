//! CREATE TABLE body extraction and column declaration parsing
//!
//! Only the first `CREATE TABLE` statement in a source is considered. Its body
//! is the text between the opening parenthesis after the table name and the
//! parenthesis that closes it, found by depth counting so that type suffixes
//! like `DECIMAL(10,2)` and trailing clauses like `PARTITION BY RANGE (d)`
//! do not end or extend the body.
//!
//! ## Supported declaration lines
//!
//! ```sql
//! name TYPE [...anything]
//! "Quoted Name" TYPE(precision[, scale]) [...anything]
//! ```
//!
//! Leading `/* ... */` comments are ignored. Table-level constraints
//! (`CONSTRAINT`, `PRIMARY KEY`, `UNIQUE`, `CHECK`, `FOREIGN KEY`), `--`
//! comment lines and stray `COMMENT ON` lines are skipped.

use std::sync::LazyLock;

use regex::Regex;

use super::scanner::CodeBytes;
use crate::model::ColumnSet;
use crate::util::{starts_with_ci, starts_with_keyword_ci, unquote_identifier};

/// `CREATE [GLOBAL|LOCAL] [TEMP|TEMPORARY] TABLE <name ...> (`
static CREATE_TABLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bCREATE\s+(?:(?:GLOBAL|LOCAL)\s+)?(?:(?:TEMP|TEMPORARY)\s+)?TABLE\b[^(;]*\(")
        .expect("Invalid CREATE TABLE regex")
});

/// Leading identifier (optionally double-quoted) and its type token, which
/// may carry a parenthesized precision/scale suffix
static COLUMN_DECL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^("[^"]+"|\w+)\s+(\w+(?:\s*\([^)]+\))?)"#).expect("Invalid column regex")
});

/// Keywords that open a table-level constraint rather than a column
const CONSTRAINT_KEYWORDS: &[&str] = &["CONSTRAINT", "PRIMARY", "UNIQUE", "CHECK", "FOREIGN"];

/// A column name and type read from one declaration line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedColumn {
    pub name: String,
    pub data_type: String,
}

/// Find the body of the first CREATE TABLE statement.
///
/// Returns `None` when there is no CREATE TABLE with a column list, when its
/// parentheses never balance, or when no `;` terminates the statement.
pub fn find_table_body(sql: &str) -> Option<&str> {
    let header = CREATE_TABLE_RE.find(sql)?;
    let body_start = header.end();

    let mut depth = 1usize;
    let mut body_end = None;
    for (offset, b) in CodeBytes::new(&sql[body_start..]) {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth -= 1;
                if depth == 0 {
                    body_end = Some(body_start + offset);
                    break;
                }
            }
            _ => {}
        }
    }
    let body_end = body_end?;

    // The closing parenthesis may be followed by table options, but the
    // statement still has to be terminated.
    let terminated = CodeBytes::new(&sql[body_end + 1..]).any(|(_, b)| b == b';');
    if !terminated {
        return None;
    }

    Some(&sql[body_start..body_end])
}

/// Split a table body into declaration segments.
///
/// Segments end at line breaks and at top-level commas; commas nested in
/// parentheses, literals or comments do not split. Segments are trimmed and
/// empty ones dropped.
pub fn split_declarations(body: &str) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (offset, b) in CodeBytes::new(body) {
        match b {
            b'(' => depth += 1,
            b')' => depth = depth.saturating_sub(1),
            b',' | b'\n' if depth == 0 => {
                push_segment(&mut segments, &body[start..offset]);
                start = offset + 1;
            }
            _ => {}
        }
    }
    push_segment(&mut segments, &body[start..]);

    segments
}

fn push_segment<'a>(segments: &mut Vec<&'a str>, raw: &'a str) {
    let line = raw.trim().trim_end_matches(',').trim_end();
    if !line.is_empty() {
        segments.push(line);
    }
}

/// True for lines that describe a table constraint or comment, not a column
pub fn is_constraint_line(line: &str) -> bool {
    CONSTRAINT_KEYWORDS
        .iter()
        .any(|kw| starts_with_keyword_ci(line, kw))
        || starts_with_comment_on(line)
}

fn starts_with_comment_on(line: &str) -> bool {
    if !starts_with_keyword_ci(line, "COMMENT") {
        return false;
    }
    starts_with_ci(line["COMMENT".len()..].trim_start(), "ON ")
}

/// Drop any block comments in front of a declaration
fn strip_leading_block_comments(mut line: &str) -> &str {
    while let Some(rest) = line.strip_prefix("/*") {
        line = match rest.find("*/") {
            Some(end) => rest[end + 2..].trim_start(),
            None => "",
        };
    }
    line
}

/// Parse one trimmed declaration line into a column name and type
pub fn parse_column_declaration(line: &str) -> Option<ParsedColumn> {
    let line = strip_leading_block_comments(line);
    if line.starts_with("--") || is_constraint_line(line) {
        return None;
    }
    let caps = COLUMN_DECL_RE.captures(line)?;
    Some(ParsedColumn {
        name: unquote_identifier(&caps[1]),
        data_type: caps[2].to_string(),
    })
}

/// Build a column set from a table body
pub fn parse_table_columns(body: &str) -> ColumnSet {
    let mut columns = ColumnSet::new();
    for line in split_declarations(body) {
        match parse_column_declaration(line) {
            Some(col) => columns.declare(col.name, col.data_type),
            None => tracing::debug!(line, "skipping non-column line"),
        }
    }
    columns
}
