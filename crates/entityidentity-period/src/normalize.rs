//! Period text normalization (`period/periodnormalize.py`): lowercase, NFC,
//! dash unification, whitespace collapse, plus the extraction helpers the
//! grammar resolver composes.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Lowercase, NFC-normalize, fold every dash variant to `-`, collapse
/// whitespace around hyphens and elsewhere.
pub fn normalize_period_text(text: &str) -> String {
    if text.trim().is_empty() {
        return String::new();
    }
    let lowered = text.trim().to_lowercase();
    let nfc: String = lowered.nfc().collect();
    let dashed = nfc.replace(['—', '–', '−', '‒'], "-");

    static SPACED_HYPHEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*-\s*").unwrap());
    let tight = SPACED_HYPHEN.replace_all(&dashed, "-");

    static EXTRA_SPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
    EXTRA_SPACE.replace_all(tight.trim(), " ").trim().to_string()
}

static YEAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(19\d{2}|20\d{2}|21\d{2})\b").unwrap());

/// Extract a 4-digit year (1900-2199) from normalized text.
pub fn extract_year(text: &str) -> Option<i32> {
    YEAR_RE.captures(text).and_then(|c| c.get(1)).and_then(|m| m.as_str().parse().ok())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QhmKind {
    Quarter,
    Half,
    Month,
}

static QUARTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bq([1-4])\b").unwrap());
static HALF_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bh([12])\b").unwrap());
static MONTH_NUM_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(0?[1-9]|1[0-2])\b").unwrap());

/// Extract a quarter/half/month-number indicator, in that priority order.
pub fn extract_quarter_half_month(text: &str) -> Option<(QhmKind, u32)> {
    if let Some(n) = QUARTER_RE.captures(text).and_then(|c| c.get(1)).and_then(|m| m.as_str().parse().ok()) {
        return Some((QhmKind::Quarter, n));
    }
    if let Some(n) = HALF_RE.captures(text).and_then(|c| c.get(1)).and_then(|m| m.as_str().parse().ok()) {
        return Some((QhmKind::Half, n));
    }
    if let Some(n) = MONTH_NUM_RE.captures(text).and_then(|c| c.get(1)).and_then(|m| m.as_str().parse().ok()) {
        return Some((QhmKind::Month, n));
    }
    None
}

const MONTH_PATTERNS: &[(u32, &str)] = &[
    (1, r"\b(jan|january)\b"),
    (2, r"\b(feb|february)\b"),
    (3, r"\b(mar|march)\b"),
    (4, r"\b(apr|april)\b"),
    (5, r"\b(may)\b"),
    (6, r"\b(jun|june)\b"),
    (7, r"\b(jul|july)\b"),
    (8, r"\b(aug|august)\b"),
    (9, r"\b(sep|sept|september)\b"),
    (10, r"\b(oct|october)\b"),
    (11, r"\b(nov|november)\b"),
    (12, r"\b(dec|december)\b"),
];

static MONTH_NAME_RES: Lazy<Vec<(u32, Regex)>> =
    Lazy::new(|| MONTH_PATTERNS.iter().map(|(n, p)| (*n, Regex::new(p).unwrap())).collect());

/// Extract a month number (1-12) from a month name or abbreviation.
pub fn extract_month_name(text: &str) -> Option<u32> {
    MONTH_NAME_RES.iter().find(|(_, re)| re.is_match(text)).map(|(n, _)| *n)
}

static ISO_WEEK_DASH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d{4})-?w(0?[1-9]|[1-4]\d|5[0-3])\b").unwrap());
static ISO_WEEK_LEAD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bw(0?[1-9]|[1-4]\d|5[0-3])\s+(\d{4})\b").unwrap());

/// Extract `(year, week)` from either `YYYY-Www` / `YYYYWww` or `Www YYYY`.
pub fn extract_iso_week(text: &str) -> Option<(i32, u32)> {
    if let Some(c) = ISO_WEEK_DASH_RE.captures(text) {
        let year: i32 = c.get(1)?.as_str().parse().ok()?;
        let week: u32 = c.get(2)?.as_str().parse().ok()?;
        return Some((year, week));
    }
    if let Some(c) = ISO_WEEK_LEAD_RE.captures(text) {
        let week: u32 = c.get(1)?.as_str().parse().ok()?;
        let year: i32 = c.get(2)?.as_str().parse().ok()?;
        return Some((year, week));
    }
    None
}

static RANGE_TOKEN_DASH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(q[1-4]|h[12]|jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)-").unwrap());
static RANGE_TO_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bto\b").unwrap());
static RANGE_THROUGH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bthrough\b").unwrap());
static RANGE_THRU_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bthru\b").unwrap());

/// Does the text contain a range separator (`-`, `to`, `through`, `thru`)
/// between two period tokens?
pub fn detect_range_separator(text: &str) -> bool {
    RANGE_TOKEN_DASH_RE.is_match(text) || RANGE_TO_RE.is_match(text) || RANGE_THROUGH_RE.is_match(text) || RANGE_THRU_RE.is_match(text)
}

static RELATIVE_KEYWORDS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ["last", "this", "next", "current", "previous", "prior"]
        .iter()
        .map(|k| Regex::new(&format!(r"\b{k}\b")).unwrap())
        .collect()
});

/// Does the text describe a relative period ("last quarter", "this year")?
pub fn is_relative_period(text: &str) -> bool {
    RELATIVE_KEYWORDS.iter().any(|re| re.is_match(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_dashes_and_case() {
        assert_eq!(normalize_period_text("Q1 2026"), "q1 2026");
        assert_eq!(normalize_period_text("H2-2025"), "h2-2025");
        assert_eq!(normalize_period_text("Jan – Mar 2025"), "jan-mar 2025");
        assert_eq!(normalize_period_text("2025  Q1"), "2025 q1");
    }

    #[test]
    fn extracts_year_and_iso_week() {
        assert_eq!(extract_year("q1 2026"), Some(2026));
        assert_eq!(extract_iso_week("2025-w02"), Some((2025, 2)));
        assert_eq!(extract_iso_week("w02 2025"), Some((2025, 2)));
        assert_eq!(extract_iso_week("q1 2025"), None);
    }

    #[test]
    fn extracts_quarter_half_month() {
        assert_eq!(extract_quarter_half_month("q1 2026"), Some((QhmKind::Quarter, 1)));
        assert_eq!(extract_quarter_half_month("h2 2025"), Some((QhmKind::Half, 2)));
        assert_eq!(extract_quarter_half_month("fy2026"), None);
    }

    #[test]
    fn detects_relative_and_range() {
        assert!(is_relative_period("last quarter"));
        assert!(!is_relative_period("q1 2026"));
        assert!(detect_range_separator("q1-q2 2026"));
        assert!(detect_range_separator("h1 to h2 2026"));
        assert!(!detect_range_separator("q1 2026"));
    }
}
