//! Shared utility helpers.

/// Case-insensitive starts_with check without allocating.
#[inline]
pub fn starts_with_ci(haystack: &str, needle: &str) -> bool {
    haystack.len() >= needle.len()
        && haystack.as_bytes()[..needle.len()].eq_ignore_ascii_case(needle.as_bytes())
}

/// Case-insensitive check that `haystack` opens with `keyword` as a whole word.
///
/// The keyword must be followed by end of input or a character that cannot
/// continue an identifier, so `CHECK (x > 0)` matches `CHECK` but
/// `check_date DATE` does not.
#[inline]
pub fn starts_with_keyword_ci(haystack: &str, keyword: &str) -> bool {
    if !starts_with_ci(haystack, keyword) {
        return false;
    }
    match haystack[keyword.len()..].chars().next() {
        None => true,
        Some(c) => !(c.is_alphanumeric() || c == '_' || c == '$'),
    }
}

/// Strip every double quote from an identifier (`"Name"` -> `Name`).
#[inline]
pub fn unquote_identifier(raw: &str) -> String {
    raw.replace('"', "")
}
