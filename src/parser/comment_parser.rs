//! COMMENT ON COLUMN extraction
//!
//! ```sql
//! COMMENT ON COLUMN [schema.][table.]column IS 'text';
//! ```
//!
//! Qualifiers of any depth are accepted and dropped; only the last segment
//! names the target column. The literal is kept verbatim, so an escaped
//! quote (`''`) stays doubled in the output.

use std::sync::LazyLock;

use regex::Regex;

use crate::model::ColumnSet;
use crate::util::unquote_identifier;

static COLUMN_COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)COMMENT\s+ON\s+COLUMN\s+((?:(?:"[^"]+"|\w+)\.)*)("[^"]+"|\w+)\s+IS\s+'(.*?)'\s*;"#)
        .expect("Invalid COMMENT ON COLUMN regex")
});

/// A single COMMENT ON COLUMN statement
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnComment {
    /// Schema/table qualifiers in source order, quotes removed
    pub qualifiers: Vec<String>,
    /// Target column name, quotes removed
    pub column: String,
    /// Comment literal content
    pub text: String,
}

/// Collect every column comment statement in `sql`, in source order
pub fn extract_column_comments(sql: &str) -> Vec<ColumnComment> {
    COLUMN_COMMENT_RE
        .captures_iter(sql)
        .map(|caps| ColumnComment {
            qualifiers: caps[1]
                .split('.')
                .filter(|s| !s.is_empty())
                .map(unquote_identifier)
                .collect(),
            column: unquote_identifier(&caps[2]),
            text: caps[3].to_string(),
        })
        .collect()
}

/// Apply comments to their declared columns; later statements win.
///
/// Comments on columns that were never declared are dropped. Returns how many
/// comments were applied.
pub fn apply_column_comments(columns: &mut ColumnSet, comments: &[ColumnComment]) -> usize {
    let mut applied = 0;
    for comment in comments {
        if columns.set_comment(&comment.column, comment.text.clone()) {
            applied += 1;
        } else {
            tracing::debug!(
                column = %comment.column,
                "dropping comment for undeclared column"
            );
        }
    }
    applied
}
