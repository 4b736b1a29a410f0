//! Place blocking cascade (`places/placeapi.py`): a country filter, retried
//! via [`country_identifier`] when the raw hint is not already an ISO2 code
//! and would otherwise empty the pool, followed by an admin1 prefix filter.

use entityidentity_core::blocking::{run_blockers, BlockOutcome, Blocker};
use entityidentity_countries::{country_identifier, CodeSystem};

use crate::types::PlaceRecord;

const MAX_CANDIDATES: usize = 50_000;

pub fn block_candidates<'a>(
    records: &'a [PlaceRecord],
    admin1_norm: &str,
    country_hint: Option<&str>,
) -> Vec<&'a PlaceRecord> {
    let candidates: Vec<&PlaceRecord> = records.iter().collect();

    let country = resolve_country_hint(country_hint, &candidates);
    let prefix = first_token_prefix(admin1_norm);

    let blockers: Vec<Blocker<PlaceRecord>> = vec![
        Blocker::new("country", false, move |r: &PlaceRecord| {
            country.as_deref().map_or(true, |c| r.country == c)
        }),
        Blocker::new("admin1_prefix", false, move |r: &PlaceRecord| {
            prefix.as_deref().map_or(true, |p| {
                r.admin1_norm.contains(p) || r.aliases_norm.iter().any(|a| a.contains(p))
            })
        }),
    ];

    let pool = match run_blockers(&candidates, &blockers) {
        BlockOutcome::ShortCircuit(row) => vec![row],
        BlockOutcome::Pool(pool) => pool,
    };

    pool.into_iter().take(MAX_CANDIDATES).collect()
}

/// A raw `country_hint` may already be an ISO2 code, or a country name/
/// colloquialism that needs resolving first (`placeapi.py::place_identifier`:
/// "if the hint isn't a recognized code and is longer than two characters,
/// try resolving it through the country resolver before giving up on it").
fn resolve_country_hint(country_hint: Option<&str>, candidates: &[&PlaceRecord]) -> Option<String> {
    let hint = country_hint?;
    let upper = hint.to_uppercase();
    if candidates.iter().any(|r| r.country == upper) {
        return Some(upper);
    }
    if hint.len() > 2 {
        if let Some(code) = country_identifier(hint, CodeSystem::Iso2, true) {
            return Some(code);
        }
    }
    Some(upper)
}

fn first_token_prefix(admin1_norm: &str) -> Option<String> {
    admin1_norm
        .split_whitespace()
        .find(|tok| tok.len() >= 3)
        .map(str::to_string)
}
