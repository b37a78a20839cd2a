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
/// - Value has any trailing ` # comment` removed
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let trimmed = line.trim();
    let (raw_key, raw_val) = trimmed.split_once('=')?;
    let key = raw_key
        .trim()
        .to_lowercase()
        .replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// What: Remove a trailing inline comment.
///
/// Details:
/// - Only a `#` preceded by whitespace starts a comment, so values such as
///   `C#` or URL fragments survive.
#[must_use]
pub fn strip_inline_comment(s: &str) -> &str {
    let bytes = s.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'#' && i > 0 && bytes[i - 1].is_ascii_whitespace() {
            return s[..i].trim();
        }
    }
    s.trim()
}

/// Parse the usual truthy spellings (`true`, `1`, `yes`, `on`).
#[must_use]
pub fn parse_bool(val: &str) -> bool {
    let lv = val.trim().to_ascii_lowercase();
    lv == "true" || lv == "1" || lv == "yes" || lv == "on"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comment and blank lines are skipped
    fn config_skip_comment_or_empty() {
        assert!(skip_comment_or_empty(""));
        assert!(skip_comment_or_empty("   "));
        assert!(skip_comment_or_empty("# c"));
        assert!(skip_comment_or_empty("// c"));
        assert!(skip_comment_or_empty("; c"));
        assert!(!skip_comment_or_empty("a = b"));
    }

    #[test]
    /// What: Keys are normalized and inline comments stripped
    fn config_parse_key_value_normalizes() {
        assert_eq!(
            parse_key_value("Items-Per.Page = 10 # rows"),
            Some(("items_per_page".into(), "10".into()))
        );
        assert_eq!(
            parse_key_value("path = /tmp/a#b"),
            Some(("path".into(), "/tmp/a#b".into()))
        );
        assert_eq!(parse_key_value("novalue"), None);
        assert_eq!(parse_key_value(" = x"), None);
    }

    #[test]
    /// What: Truthy spellings parse as true, anything else false
    fn config_parse_bool() {
        for v in ["true", "1", "YES", "on"] {
            assert!(parse_bool(v));
        }
        for v in ["false", "0", "no", "maybe"] {
            assert!(!parse_bool(v));
        }
    }
}
