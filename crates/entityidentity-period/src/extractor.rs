//! Multi-period extraction from free text (`period/periodapi.py::extract_periods`):
//! a regex battery, run in priority order, with overlap de-duplication and a
//! start-timestamp sort.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::normalize_period_text;
use crate::resolver::resolve_period;
use crate::types::Period;

static PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"\b\d{4}-?w\d{1,2}\b").unwrap(),
        Regex::new(r"\b(q[1-4]\s+\d{4}|\d{4}\s*q[1-4])\b").unwrap(),
        Regex::new(r"\b(h[12]\s+\d{4}|\d{4}\s*h[12])\b").unwrap(),
        Regex::new(r"\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\w*\s+\d{4}\b").unwrap(),
        Regex::new(r"\b\d{4}-(0?[1-9]|1[0-2])\b").unwrap(),
        Regex::new(r"\b(fy)?\s*\d{4}\b").unwrap(),
        Regex::new(
            r"\b(q[1-4]|h[12]|jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\w*-(q[1-4]|h[12]|jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\w*\s+\d{4}\b",
        )
        .unwrap(),
    ]
});

/// Scan `text` for every period pattern, resolving each non-overlapping
/// match and returning them ordered by start timestamp.
pub fn extract_periods(text: &str, asof_ts: Option<DateTime<Utc>>) -> Vec<Period> {
    if text.trim().is_empty() {
        return Vec::new();
    }

    let text_norm = normalize_period_text(text);
    let mut periods: Vec<Period> = Vec::new();
    let mut matched_spans: Vec<(usize, usize)> = Vec::new();

    for pattern in PATTERNS.iter() {
        for m in pattern.find_iter(&text_norm) {
            let span = (m.start(), m.end());
            if matched_spans.iter().any(|&(ps, pe)| span.0 < pe && span.1 > ps) {
                continue;
            }
            if let Some(period) = resolve_period(m.as_str(), asof_ts) {
                periods.push(period);
                matched_spans.push(span);
            }
        }
    }

    periods.sort_by_key(|p| p.start_ts);
    periods
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_multiple_non_overlapping_periods() {
        let periods = extract_periods("Results for Q1 2026 and H2 2025 were strong.", None);
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].period_id, "2025H2");
        assert_eq!(periods[1].period_id, "2026Q1");
    }

    #[test]
    fn extracts_month_names_in_order() {
        let periods = extract_periods("Revenue grew from Jan 2025 to Mar 2025.", None);
        assert_eq!(periods.len(), 2);
        assert_eq!(periods[0].period_id, "2025-01");
        assert_eq!(periods[1].period_id, "2025-03");
    }

    #[test]
    fn empty_text_yields_no_periods() {
        assert!(extract_periods("", None).is_empty());
    }
}
