//! Place resolution (`places/placeapi.py`): exact admin1 match, then exact
//! alias match, then a fuzzy fallback filtered by a threshold inline rather
//! than through the generic gap-aware company decision — places have no
//! "needs hint" middle tier, only match-or-no-match.

use entityidentity_core::wratio::wratio;

use crate::blocking::block_candidates;
use crate::normalize::normalize_place_name;
use crate::types::PlaceRecord;

#[derive(Debug, Clone)]
pub struct PlaceMatch<'a> {
    pub record: &'a PlaceRecord,
    pub score: f64,
}

#[derive(Debug, Clone)]
pub struct ResolveResult<'a> {
    pub query: String,
    pub best: Option<PlaceMatch<'a>>,
}

/// Resolve `name` against `records`, optionally narrowed by `country_hint`
/// (an ISO2 code or a country name to be resolved first). `threshold` gates
/// the fuzzy fallback stage only; exact admin1/alias matches always win.
pub fn resolve_place<'a>(
    name: &str,
    records: &'a [PlaceRecord],
    country_hint: Option<&str>,
    threshold: f64,
) -> ResolveResult<'a> {
    let query_norm = normalize_place_name(name);
    let pool = block_candidates(records, &query_norm, country_hint);

    let best = pool
        .iter()
        .find(|r| r.admin1_norm == query_norm)
        .map(|r| PlaceMatch { record: r, score: 100.0 })
        .or_else(|| {
            pool.iter()
                .find(|r| r.aliases_norm.iter().any(|a| a == &query_norm))
                .map(|r| PlaceMatch { record: r, score: 100.0 })
        })
        .or_else(|| {
            pool.iter()
                .map(|r| PlaceMatch { record: r, score: score_candidate(r, &query_norm) })
                .filter(|m| m.score >= threshold)
                .max_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(std::cmp::Ordering::Equal))
        });

    ResolveResult { query: name.to_string(), best }
}

fn score_candidate(record: &PlaceRecord, query_norm: &str) -> f64 {
    let primary = wratio(query_norm, &record.admin1_norm);
    let alias = record
        .aliases_norm
        .iter()
        .map(|a| wratio(query_norm, a))
        .fold(0.0_f64, f64::max);
    primary.max(alias)
}

/// Top-K candidates regardless of threshold, for review UIs
/// (`placeapi.py::match_place`).
pub fn match_place<'a>(
    name: &str,
    records: &'a [PlaceRecord],
    k: usize,
    country_hint: Option<&str>,
) -> Vec<PlaceMatch<'a>> {
    let query_norm = normalize_place_name(name);
    let pool = block_candidates(records, &query_norm, country_hint);

    let mut scored: Vec<PlaceMatch<'a>> = pool
        .into_iter()
        .map(|r| PlaceMatch { record: r, score: score_candidate(r, &query_norm) })
        .collect();
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    scored
}

/// `placeapi.py::list_places`: country filter only.
pub fn list_places(records: &[PlaceRecord], country: Option<&str>) -> Vec<&PlaceRecord> {
    let country = country.map(str::to_uppercase);
    records
        .iter()
        .filter(|r| country.as_deref().map_or(true, |c| r.country == c))
        .collect()
}
