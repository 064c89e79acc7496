//! Small formatting and collection helpers.
//!
//! These are render-time helpers: they operate on individual values, never
//! inside the query pipeline. Unparseable input falls through as-is; in a
//! display layer availability trumps strictness.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;
use unicode_segmentation::UnicodeSegmentation;

/// Format a number as currency text, e.g. `2991.8` -> `"€2,991.80"`.
///
/// Thousands are comma-grouped and the amount is rounded to two decimals.
pub fn format_currency(value: f64, symbol: &str) -> String {
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol}{grouped}.{frac:02}")
}

/// Format a timestamp for display, e.g. `"2024-10-22T10:40:00Z"` ->
/// `"Oct 22, 2024, 10:40"`.
///
/// Accepts RFC 3339 or a plain `YYYY-MM-DD[THH:MM:SS]` date. Anything else
/// is returned unchanged.
pub fn format_date(input: &str) -> String {
    const DISPLAY: &str = "%b %-d, %Y, %H:%M";

    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S") {
        return dt.format(DISPLAY).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return dt.format(DISPLAY).to_string();
        }
    }
    input.to_string()
}

/// Truncate a string to at most `max` graphemes, appending `"..."` when cut.
pub fn truncate(s: &str, max: usize) -> String {
    let graphemes: Vec<&str> = s.graphemes(true).collect();
    if graphemes.len() <= max {
        return s.to_string();
    }
    let mut out: String = graphemes[..max].concat();
    out.push_str("...");
    out
}

/// Group items by a string key, preserving first-appearance key order.
///
/// Within a bucket, items keep their input order. This is the ordered
/// grouping the pipeline's group stage is built on.
pub fn group_by_key<T, F>(items: Vec<T>, key_fn: F) -> Vec<(String, Vec<T>)>
where
    F: Fn(&T) -> String,
{
    let mut buckets: Vec<(String, Vec<T>)> = Vec::new();
    for item in items {
        let key = key_fn(&item);
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(item),
            None => buckets.push((key, vec![item])),
        }
    }
    buckets
}

/// Check if a JSON value is empty: null, blank string, empty array or
/// empty object. Numbers and booleans are never empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
        Value::Bool(_) | Value::Number(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_currency_groups_thousands() {
        assert_eq!(format_currency(2991.8, "€"), "€2,991.80");
        assert_eq!(format_currency(804.92, "€"), "€804.92");
        assert_eq!(format_currency(1234567.0, "$"), "$1,234,567.00");
    }

    #[test]
    fn test_format_currency_rounds_and_signs() {
        assert_eq!(format_currency(0.005, "€"), "€0.01");
        assert_eq!(format_currency(-195.84, "€"), "-€195.84");
        assert_eq!(format_currency(0.0, "€"), "€0.00");
    }

    #[test]
    fn test_format_date_rfc3339() {
        assert_eq!(format_date("2024-10-22T10:40:00Z"), "Oct 22, 2024, 10:40");
        assert_eq!(format_date("2024-10-22"), "Oct 22, 2024, 00:00");
    }

    #[test]
    fn test_format_date_passes_garbage_through() {
        assert_eq!(format_date("Oct 22, 2024, 10:40"), "Oct 22, 2024, 10:40");
        assert_eq!(format_date(""), "");
    }

    #[test]
    fn test_truncate_respects_graphemes() {
        assert_eq!(truncate("short", 50), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        // A family emoji is one grapheme, many bytes.
        assert_eq!(truncate("👨‍👩‍👧x", 1), "👨‍👩‍👧...");
    }

    #[test]
    fn test_group_by_key_preserves_first_appearance_order() {
        let buckets = group_by_key(vec!["b1", "a1", "b2", "c1", "a2"], |s| {
            s[..1].to_string()
        });
        let keys: Vec<&str> = buckets.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(buckets[0].1, vec!["b1", "b2"]);
        assert_eq!(buckets[1].1, vec!["a1", "a2"]);
    }

    #[test]
    fn test_is_empty() {
        assert!(is_empty(&Value::Null));
        assert!(is_empty(&json!("   ")));
        assert!(is_empty(&json!([])));
        assert!(is_empty(&json!({})));
        assert!(!is_empty(&json!(0)));
        assert!(!is_empty(&json!(false)));
        assert!(!is_empty(&json!("x")));
        assert!(!is_empty(&json!([1])));
    }
}
