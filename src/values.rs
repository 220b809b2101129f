//! Cell value sanitising
//!
//! Spreadsheet readers hand over raw cell strings. Before layout they are
//! trimmed, blanks and the missing-value token are dropped, and duplicates
//! optionally removed keeping the first occurrence.

use std::collections::HashSet;

/// How a missing cell reads once stringified
pub const MISSING_VALUE_TOKEN: &str = "nan";

/// Trimmed value, or `None` if the cell is blank or missing
pub fn sanitize_value(raw: &str) -> Option<&str> {
    let text = raw.trim();
    if text.is_empty() || text.eq_ignore_ascii_case(MISSING_VALUE_TOKEN) {
        None
    } else {
        Some(text)
    }
}

/// Sanitise a list of cell values, preserving input order
pub fn sanitize_values<I>(values: I, remove_duplicates: bool) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for raw in values {
        let Some(text) = sanitize_value(raw.as_ref()) else {
            continue;
        };
        if remove_duplicates && !seen.insert(text.to_string()) {
            continue;
        }
        out.push(text.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_value() {
        assert_eq!(sanitize_value("  A-12 \n"), Some("A-12"));
        assert_eq!(sanitize_value("   "), None);
        assert_eq!(sanitize_value("NaN"), None);
        assert_eq!(sanitize_value("banana"), Some("banana"));
    }

    #[test]
    fn test_sanitize_values_keeps_order() {
        let raw = ["B", " ", "A", "nan", "B ", "C"];
        assert_eq!(sanitize_values(raw, false), vec!["B", "A", "B", "C"]);
        assert_eq!(sanitize_values(raw, true), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_dedup_compares_trimmed_text() {
        let raw = vec![" x".to_string(), "x ".to_string(), "X".to_string()];
        assert_eq!(sanitize_values(&raw, true), vec!["x", "X"]);
    }
}
