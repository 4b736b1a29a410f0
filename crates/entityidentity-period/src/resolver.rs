//! Period grammar resolution (`period/periodidentity.py::resolve_period`
//! and its private `_resolve_*` helpers).

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc, Weekday};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::normalize::{
    detect_range_separator, extract_iso_week, extract_month_name, extract_quarter_half_month, extract_year, is_relative_period,
    normalize_period_text, QhmKind,
};
use crate::types::{Period, PeriodType};

const DEFAULT_SCORE: u8 = 95;

fn start_of_day(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Some(NaiveDate::from_ymd_opt(year, month, day)?.and_hms_opt(0, 0, 0)?.and_utc())
}

fn end_of_day(year: i32, month: u32, day: u32) -> Option<DateTime<Utc>> {
    Some(NaiveDate::from_ymd_opt(year, month, day)?.and_hms_micro_opt(23, 59, 59, 999_999)?.and_utc())
}

fn last_day_of_month(year: i32, month: u32) -> u32 {
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let next_first = NaiveDate::from_ymd_opt(next_year, next_month, 1).expect("valid calendar month");
    (next_first - Duration::days(1)).day()
}

fn resolve_year(year: i32) -> Option<Period> {
    Some(Period {
        period_type: PeriodType::Year,
        period_id: year.to_string(),
        start_ts: start_of_day(year, 1, 1)?,
        end_ts: end_of_day(year, 12, 31)?,
        year,
        quarter: None,
        month: None,
        asof_ts: Utc::now(),
        timezone: "UTC",
        score: DEFAULT_SCORE,
    })
}

/// H1 = Jan-Jun, H2 = Jul-Dec. Not decomposed into quarters.
fn resolve_half(year: i32, half: u32) -> Option<Period> {
    let (start_month, end_month, end_day) = if half == 1 { (1, 6, 30) } else { (7, 12, 31) };
    Some(Period {
        period_type: PeriodType::Half,
        period_id: format!("{year}H{half}"),
        start_ts: start_of_day(year, start_month, 1)?,
        end_ts: end_of_day(year, end_month, end_day)?,
        year,
        quarter: None,
        month: None,
        asof_ts: Utc::now(),
        timezone: "UTC",
        score: DEFAULT_SCORE,
    })
}

fn quarter_bounds(quarter: u32) -> Option<(u32, u32, u32)> {
    match quarter {
        1 => Some((1, 3, 31)),
        2 => Some((4, 6, 30)),
        3 => Some((7, 9, 30)),
        4 => Some((10, 12, 31)),
        _ => None,
    }
}

fn resolve_quarter(year: i32, quarter: u32) -> Option<Period> {
    let (start_month, end_month, end_day) = quarter_bounds(quarter)?;
    Some(Period {
        period_type: PeriodType::Quarter,
        period_id: format!("{year}Q{quarter}"),
        start_ts: start_of_day(year, start_month, 1)?,
        end_ts: end_of_day(year, end_month, end_day)?,
        year,
        quarter: Some(quarter),
        month: None,
        asof_ts: Utc::now(),
        timezone: "UTC",
        score: DEFAULT_SCORE,
    })
}

fn resolve_month(year: i32, month: u32) -> Option<Period> {
    if !(1..=12).contains(&month) {
        return None;
    }
    let last_day = last_day_of_month(year, month);
    let quarter = (month - 1) / 3 + 1;
    Some(Period {
        period_type: PeriodType::Month,
        period_id: format!("{year}-{month:02}"),
        start_ts: start_of_day(year, month, 1)?,
        end_ts: end_of_day(year, month, last_day)?,
        year,
        quarter: Some(quarter),
        month: Some(month),
        asof_ts: Utc::now(),
        timezone: "UTC",
        score: DEFAULT_SCORE,
    })
}

/// ISO 8601 week, Monday start.
fn resolve_week(year: i32, week: u32) -> Option<Period> {
    let monday = NaiveDate::from_isoywd_opt(year, week, Weekday::Mon)?;
    let sunday = NaiveDate::from_isoywd_opt(year, week, Weekday::Sun)?;
    let quarter = (monday.month() - 1) / 3 + 1;
    Some(Period {
        period_type: PeriodType::Week,
        period_id: format!("{year}-W{week:02}"),
        start_ts: start_of_day(monday.year(), monday.month(), monday.day())?,
        end_ts: end_of_day(sunday.year(), sunday.month(), sunday.day())?,
        year,
        quarter: Some(quarter),
        month: Some(monday.month()),
        asof_ts: Utc::now(),
        timezone: "UTC",
        score: DEFAULT_SCORE,
    })
}

fn resolve_relative(text_norm: &str, asof_ts: DateTime<Utc>) -> Option<Period> {
    enum Kind {
        Quarter,
        Year,
        Month,
    }
    let kind = if text_norm.contains("quarter") {
        Kind::Quarter
    } else if text_norm.contains("year") {
        Kind::Year
    } else if text_norm.contains("month") {
        Kind::Month
    } else {
        return None;
    };

    let offset: i32 = if ["last", "previous", "prior"].iter().any(|k| text_norm.contains(k)) {
        -1
    } else if ["this", "current"].iter().any(|k| text_norm.contains(k)) {
        0
    } else if text_norm.contains("next") {
        1
    } else {
        return None;
    };

    match kind {
        Kind::Quarter => {
            let current_q = (asof_ts.month() as i32 - 1) / 3 + 1;
            let mut target_q = current_q + offset;
            let mut target_year = asof_ts.year();
            if target_q < 1 {
                target_q += 4;
                target_year -= 1;
            } else if target_q > 4 {
                target_q -= 4;
                target_year += 1;
            }
            resolve_quarter(target_year, target_q as u32)
        }
        Kind::Year => resolve_year(asof_ts.year() + offset),
        Kind::Month => {
            let mut target_month = asof_ts.month() as i32 + offset;
            let mut target_year = asof_ts.year();
            if target_month < 1 {
                target_month += 12;
                target_year -= 1;
            } else if target_month > 12 {
                target_month -= 12;
                target_year += 1;
            }
            resolve_month(target_year, target_month as u32)
        }
    }
}

static Q_RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"q([1-4])(?:-|to)q([1-4])").unwrap());
static H_RANGE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"h([12])(?:-|to)h([12])").unwrap());
static MONTH_TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)\b").unwrap());

fn date_range(start: Period, end: Period) -> Period {
    Period {
        period_type: PeriodType::DateRange,
        period_id: format!("{}-{}", start.period_id, end.period_id),
        start_ts: start.start_ts,
        end_ts: end.end_ts,
        year: start.year,
        quarter: None,
        month: None,
        asof_ts: start.asof_ts,
        timezone: "UTC",
        score: DEFAULT_SCORE,
    }
}

fn resolve_range(text_norm: &str) -> Option<Period> {
    let year = extract_year(text_norm)?;

    if let Some(c) = Q_RANGE_RE.captures(text_norm) {
        let q1: u32 = c.get(1)?.as_str().parse().ok()?;
        let q2: u32 = c.get(2)?.as_str().parse().ok()?;
        return Some(date_range(resolve_quarter(year, q1)?, resolve_quarter(year, q2)?));
    }

    if let Some(c) = H_RANGE_RE.captures(text_norm) {
        let h1: u32 = c.get(1)?.as_str().parse().ok()?;
        let h2: u32 = c.get(2)?.as_str().parse().ok()?;
        return Some(date_range(resolve_half(year, h1)?, resolve_half(year, h2)?));
    }

    let months: Vec<u32> = MONTH_TOKEN_RE
        .find_iter(text_norm)
        .filter_map(|m| extract_month_name(m.as_str()))
        .collect();
    if months.len() >= 2 {
        let m1 = *months.first()?;
        let m2 = *months.last()?;
        return Some(date_range(resolve_month(year, m1)?, resolve_month(year, m2)?));
    }

    None
}

fn with_query_metadata(mut period: Period, asof_ts: DateTime<Utc>) -> Period {
    period.asof_ts = asof_ts;
    period.timezone = "UTC";
    period.score = DEFAULT_SCORE;
    period
}

/// Resolve free-text to a [`Period`], or `None` if no grammar rule matches.
/// `asof_ts` anchors relative periods ("last quarter"); defaults to now-UTC.
pub fn resolve_period(text: &str, asof_ts: Option<DateTime<Utc>>) -> Option<Period> {
    if text.trim().is_empty() {
        return None;
    }
    let text_norm = normalize_period_text(text);
    let asof_ts = asof_ts.unwrap_or_else(Utc::now);

    if is_relative_period(&text_norm) {
        if let Some(period) = resolve_relative(&text_norm, asof_ts) {
            return Some(with_query_metadata(period, asof_ts));
        }
    }

    if detect_range_separator(&text_norm) {
        if let Some(period) = resolve_range(&text_norm) {
            return Some(with_query_metadata(period, asof_ts));
        }
    }

    if let Some((iso_year, iso_week)) = extract_iso_week(&text_norm) {
        if let Some(period) = resolve_week(iso_year, iso_week) {
            return Some(with_query_metadata(period, asof_ts));
        }
    }

    if let Some(year) = extract_year(&text_norm) {
        if let Some((QhmKind::Half, n)) = extract_quarter_half_month(&text_norm) {
            if let Some(period) = resolve_half(year, n) {
                return Some(with_query_metadata(period, asof_ts));
            }
        }
        if let Some((QhmKind::Quarter, n)) = extract_quarter_half_month(&text_norm) {
            if let Some(period) = resolve_quarter(year, n) {
                return Some(with_query_metadata(period, asof_ts));
            }
        }
        if let Some((QhmKind::Month, n)) = extract_quarter_half_month(&text_norm) {
            if let Some(period) = resolve_month(year, n) {
                return Some(with_query_metadata(period, asof_ts));
            }
        }
        if let Some(month) = extract_month_name(&text_norm) {
            if let Some(period) = resolve_month(year, month) {
                return Some(with_query_metadata(period, asof_ts));
            }
        }
        if let Some(period) = resolve_year(year) {
            return Some(with_query_metadata(period, asof_ts));
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn resolves_half_year() {
        let period = resolve_period("H2 2026", None).unwrap();
        assert_eq!(period.period_id, "2026H2");
        assert_eq!(period.period_type.as_str(), "half");
        assert!(period.quarter.is_none());
    }

    #[test]
    fn resolves_quarter_range() {
        let period = resolve_period("Q1-Q2 2026", None).unwrap();
        assert_eq!(period.period_id, "2026Q1-2026Q2");
        assert_eq!(period.period_type.as_str(), "date_range");
        assert_eq!(period.start_ts.month(), 1);
        assert_eq!(period.end_ts.month(), 6);
    }

    #[test]
    fn resolves_iso_week_monday_start() {
        let period = resolve_period("2025-W02", None).unwrap();
        assert_eq!(period.period_id, "2025-W02");
        assert_eq!(period.start_ts.weekday(), Weekday::Mon);
        assert_eq!(period.end_ts.weekday(), Weekday::Sun);
    }

    #[test]
    fn resolves_relative_quarter_with_year_wrap() {
        let asof = Utc.with_ymd_and_hms(2025, 10, 2, 0, 0, 0).unwrap();
        let period = resolve_period("last quarter", Some(asof)).unwrap();
        assert_eq!(period.period_id, "2025Q3");
    }

    #[test]
    fn resolves_month_name_with_year() {
        let period = resolve_period("Jan 2026", None).unwrap();
        assert_eq!(period.period_id, "2026-01");
        assert_eq!(period.quarter, Some(1));
    }

    #[test]
    fn resolves_year_only() {
        let period = resolve_period("2025", None).unwrap();
        assert_eq!(period.period_id, "2025");
        assert_eq!(period.period_type.as_str(), "year");
    }

    #[test]
    fn unparseable_text_returns_none() {
        assert!(resolve_period("not a period", None).is_none());
    }

    #[test]
    fn boundary_timestamps_are_inclusive() {
        let period = resolve_period("2025", None).unwrap();
        assert_eq!(period.start_ts.format("%H:%M:%S%.6f").to_string(), "00:00:00.000000");
        assert_eq!(period.end_ts.format("%H:%M:%S%.6f").to_string(), "23:59:59.999999");
    }
}
