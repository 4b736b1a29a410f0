//! The canonical `Period` value (spec.md §4.8): a tagged variant over
//! year/half/quarter/month/week/date_range with UTC boundary timestamps.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use entityidentity_core::record::ToMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodType {
    Year,
    Half,
    Quarter,
    Month,
    Week,
    DateRange,
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Year => "year",
            PeriodType::Half => "half",
            PeriodType::Quarter => "quarter",
            PeriodType::Month => "month",
            PeriodType::Week => "week",
            PeriodType::DateRange => "date_range",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Period {
    pub period_type: PeriodType,
    pub period_id: String,
    pub start_ts: DateTime<Utc>,
    pub end_ts: DateTime<Utc>,
    pub year: i32,
    pub quarter: Option<u32>,
    pub month: Option<u32>,
    pub asof_ts: DateTime<Utc>,
    pub timezone: &'static str,
    pub score: u8,
}

impl Period {
    /// `periodapi.py`'s `period_range`-equivalent convenience: the already
    /// resolved boundaries, without re-parsing the period text.
    pub fn bounds(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (self.start_ts, self.end_ts)
    }
}

impl ToMap for Period {
    fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("period_type".to_string(), self.period_type.as_str().to_string());
        map.insert("period_id".to_string(), self.period_id.clone());
        map.insert("start_ts".to_string(), self.start_ts.to_rfc3339());
        map.insert("end_ts".to_string(), self.end_ts.to_rfc3339());
        map.insert("year".to_string(), self.year.to_string());
        map.insert("quarter".to_string(), self.quarter.map(|q| q.to_string()).unwrap_or_default());
        map.insert("month".to_string(), self.month.map(|m| m.to_string()).unwrap_or_default());
        map.insert("asof_ts".to_string(), self.asof_ts.to_rfc3339());
        map.insert("timezone".to_string(), self.timezone.to_string());
        map.insert("score".to_string(), self.score.to_string());
        map
    }
}
