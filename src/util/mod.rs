//! Small helpers for config parsing, display formatting and timestamps.

pub mod config;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// What: Cut `s` so that it occupies at most `max` terminal columns.
///
/// Inputs:
/// - `s`: Text to fit
/// - `max`: Column budget
///
/// Output:
/// - `s` unchanged when it fits; otherwise a prefix ending in `…`.
///
/// Details:
/// - Width is measured with `unicode-width`, so wide glyphs count double.
#[must_use]
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if UnicodeWidthStr::width(s) <= max {
        return s.to_string();
    }
    if max == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0usize;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Format a price with two decimals.
#[must_use]
pub fn format_price(price: f64) -> String {
    format!("{price:.2}")
}

/// What: Format a Unix timestamp as `YYYY-MM-DD HH:MM:SS` in local time.
///
/// Inputs:
/// - `ts`: Seconds since the epoch; `None` yields an empty string.
///
/// Output:
/// - Formatted timestamp, or an empty string for missing/out-of-range input.
#[must_use]
pub fn ts_to_date(ts: Option<i64>) -> String {
    let Some(t) = ts else {
        return String::new();
    };
    chrono::DateTime::from_timestamp(t, 0)
        .map(|dt| {
            dt.with_timezone(&chrono::Local)
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
        })
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Truncation respects the column budget and marks the cut
    fn util_truncate_to_width() {
        assert_eq!(truncate_to_width("Router", 10), "Router");
        assert_eq!(truncate_to_width("Router AX3000", 6), "Route…");
        assert_eq!(truncate_to_width("abc", 0), "");
        // Wide glyphs take two columns each.
        assert_eq!(truncate_to_width("日本語テキスト", 5), "日本…");
    }

    #[test]
    /// What: Prices always carry two decimals
    fn util_format_price() {
        assert_eq!(format_price(5.0), "5.00");
        assert_eq!(format_price(129.999), "130.00");
    }

    #[test]
    /// What: Missing timestamps format as empty; present ones look like a date
    fn util_ts_to_date() {
        assert_eq!(ts_to_date(None), "");
        let s = ts_to_date(Some(0));
        assert_eq!(s.len(), 19);
        assert_eq!(&s[4..5], "-");
    }
}
