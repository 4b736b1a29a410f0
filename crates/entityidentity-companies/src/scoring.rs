//! Company scoring (`companies/companyscoring.py::score_candidates`):
//! `max(score_primary, score_alias) + 2*country_match + 1*has_lei`, clipped
//! to 100.

use entityidentity_core::resolver::{rank_candidates, Scored};
use entityidentity_core::wratio::best_score;

use crate::types::CompanyRecord;

/// Per-candidate score breakdown, surfaced for the `explain` field of
/// resolve results.
#[derive(Debug, Clone)]
pub struct Explain {
    pub name_norm: String,
    pub country_match: bool,
    pub has_lei: bool,
    pub score_primary: f64,
    pub score_alias: f64,
    pub score: f64,
}

pub fn explain_candidate(record: &CompanyRecord, query_norm: &str, country: Option<&str>) -> Explain {
    let score_primary = best_score(query_norm, [record.name_norm.as_str()]);
    let score_alias = best_score(query_norm, record.aliases_norm.iter().map(String::as_str));
    let country_match = country
        .map(str::to_uppercase)
        .map(|c| record.country == c)
        .unwrap_or(false);
    let has_lei = record.lei.is_some();
    let score = (score_primary.max(score_alias) + if country_match { 2.0 } else { 0.0 } + if has_lei { 1.0 } else { 0.0 })
        .min(100.0);
    Explain {
        name_norm: record.name_norm.clone(),
        country_match,
        has_lei,
        score_primary,
        score_alias,
        score,
    }
}

pub fn rank_companies<'a>(
    pool: &[&'a CompanyRecord],
    query_norm: &str,
    country: Option<&str>,
) -> Vec<Scored<'a, CompanyRecord>> {
    rank_candidates(pool, |r| explain_candidate(r, query_norm, country).score)
}
