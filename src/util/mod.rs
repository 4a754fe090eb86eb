//! Small utility helpers for encoding and JSON extraction.
//!
//! The functions in this module are intentionally lightweight and dependency-free
//! to keep hot paths fast. They are used by the data source and config code.

pub mod config;

use serde_json::Value;
use std::fmt::Write;

/// What: Percent-encode a string for use in URLs according to RFC 3986.
///
/// Inputs:
/// - `input`: String to encode.
///
/// Output:
/// - Returns a percent-encoded string where reserved characters are escaped.
///
/// Details:
/// - Unreserved characters as per RFC 3986 (`A-Z`, `a-z`, `0-9`, `-`, `.`, `_`, `~`) are left as-is.
/// - Space is encoded as `%20` (not `+`).
/// - All other bytes are encoded as two uppercase hexadecimal digits prefixed by `%`.
#[must_use]
pub fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &b in input.as_bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(b as char);
            }
            b' ' => out.push_str("%20"),
            _ => {
                out.push('%');
                let _ = write!(out, "{b:02X}");
            }
        }
    }
    out
}

/// What: Extract a string value from a JSON object by key, defaulting to empty string.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up in the JSON object.
///
/// Output:
/// - Returns the string value if found, or an empty string if the key is missing or not a string.
#[must_use]
pub fn s(v: &Value, key: &str) -> String {
    v.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// What: Extract an unsigned 64-bit integer by trying multiple keys and representations.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `keys`: Array of candidate keys to try in order.
///
/// Output:
/// - Returns `Some(u64)` if a valid value is found, or `None` if no usable value is found.
///
/// Details:
/// - Accepts a JSON `u64`, a non-negative JSON `i64`, or a string that parses as `u64`.
#[must_use]
pub fn u64_of(v: &Value, keys: &[&str]) -> Option<u64> {
    for k in keys {
        if let Some(n) = v.get(*k) {
            if let Some(u) = n.as_u64() {
                return Some(u);
            }
            if let Some(i) = n.as_i64()
                && let Ok(u) = u64::try_from(i)
            {
                return Some(u);
            }
            if let Some(s) = n.as_str()
                && let Ok(p) = s.parse::<u64>()
            {
                return Some(p);
            }
        }
    }
    None
}

/// What: Extract a `u32` dimension, clamping out-of-range values to `u32::MAX`.
///
/// Inputs:
/// - `v`: JSON value to extract from.
/// - `key`: Key to look up.
///
/// Output:
/// - The value, or `0` when missing or not numeric.
#[must_use]
pub fn u32_or_zero(v: &Value, key: &str) -> u32 {
    u64_of(v, &[key]).map_or(0, |n| u32::try_from(n).unwrap_or(u32::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Verify that percent encoding preserves unreserved characters and escapes reserved ones.
    ///
    /// Inputs:
    /// - `cases`: Sample strings covering empty input, ASCII safe set, spaces, plus signs, and unicode.
    ///
    /// Output:
    /// - Encoded results match RFC 3986 expectations for each case.
    fn util_percent_encode() {
        assert_eq!(percent_encode(""), "");
        assert_eq!(percent_encode("abc-_.~"), "abc-_.~");
        assert_eq!(percent_encode("red cats"), "red%20cats");
        assert_eq!(percent_encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(percent_encode("é"), "%C3%A9");
    }

    #[test]
    /// What: Validate JSON helper extractors across strings and numeric conversions.
    ///
    /// Inputs:
    /// - `v`: JSON value containing strings, unsigned ints, negatives, text numbers and huge values.
    ///
    /// Output:
    /// - Helpers return expected values, defaulting or rejecting incompatible types.
    fn util_json_extractors() {
        let v: Value = serde_json::json!({
            "a": "str",
            "c": 42u64,
            "d": -5,
            "e": "123",
            "big": 10_000_000_000u64,
        });
        assert_eq!(s(&v, "a"), "str");
        assert_eq!(s(&v, "c"), "");
        assert_eq!(u64_of(&v, &["c"]), Some(42));
        assert_eq!(u64_of(&v, &["d"]), None);
        assert_eq!(u64_of(&v, &["missing", "e"]), Some(123));
        assert_eq!(u32_or_zero(&v, "c"), 42);
        assert_eq!(u32_or_zero(&v, "missing"), 0);
        assert_eq!(u32_or_zero(&v, "big"), u32::MAX);
    }
}
