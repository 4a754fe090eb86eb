//! Configuration file parsing utilities.
//!
//! This module provides helpers for parsing configuration files with common
//! patterns like comment skipping and key-value parsing.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character
/// - Key is lowercased with `.`, `-` and spaces folded to `_`
/// - Value has any trailing inline comment removed
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// What: Remove an inline comment from a configuration value.
///
/// Inputs:
/// - `s`: Raw value that may end with a comment.
///
/// Output:
/// - Comment-free & trimmed substring of the input.
///
/// Details:
/// - Only `#` or `//` preceded by whitespace starts a comment, so URLs survive.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let mut end = s.len();
    for marker in [" #", "\t#", " //", "\t//"] {
        if let Some(i) = s.find(marker) {
            end = end.min(i);
        }
    }
    s[..end].trim()
}

/// What: Interpret a configuration value as a boolean.
///
/// Inputs:
/// - `val`: Raw value
///
/// Output:
/// - `true` for `true`, `1`, `yes`, `on` (any case); `false` otherwise
#[must_use]
pub fn parse_bool(val: &str) -> bool {
    let lv = val.trim().to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}
