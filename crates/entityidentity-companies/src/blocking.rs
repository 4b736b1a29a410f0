//! Company blocking cascade (`companies/companyblocking.py::block_candidates`):
//! country filter, then first-token prefix filter, each applied only if it
//! leaves at least one candidate — which is exactly
//! [`entityidentity_core::blocking::run_blockers`]'s fallback-on-empty rule.

use entityidentity_core::blocking::{run_blockers, Blocker, BlockOutcome};

use crate::types::CompanyRecord;

const MAX_CANDIDATES: usize = 50_000;

pub fn block_candidates<'a>(
    records: &'a [CompanyRecord],
    query_norm: &str,
    country: Option<&str>,
) -> Vec<&'a CompanyRecord> {
    let candidates: Vec<&CompanyRecord> = records.iter().collect();

    let prefix = first_token_prefix(query_norm);
    let country = country.map(str::to_uppercase);

    let blockers: Vec<Blocker<CompanyRecord>> = vec![
        Blocker::new("country", false, move |r: &CompanyRecord| {
            country.as_deref().map_or(true, |c| r.country == c)
        }),
        Blocker::new("name_prefix", false, move |r: &CompanyRecord| {
            prefix.as_deref().map_or(true, |p| {
                r.name_norm.contains(p) || r.aliases_norm.iter().any(|a| a.contains(p))
            })
        }),
    ];

    let pool = match run_blockers(&candidates, &blockers) {
        BlockOutcome::ShortCircuit(row) => vec![row],
        BlockOutcome::Pool(pool) => pool,
    };

    pool.into_iter().take(MAX_CANDIDATES).collect()
}

/// First whitespace-delimited token of at least 3 characters, or `None` if
/// the query has no such token (too short to usefully prefix-filter on).
fn first_token_prefix(query_norm: &str) -> Option<String> {
    query_norm
        .split_whitespace()
        .find(|tok| tok.len() >= 3)
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, country: &str) -> CompanyRecord {
        CompanyRecord {
            name: name.to_string(),
            name_norm: crate::normalize::normalize_company_name(name),
            country: country.to_string(),
            lei: None,
            aliases: vec![],
            aliases_norm: vec![],
        }
    }

    #[test]
    fn country_filter_narrows_pool() {
        let records = vec![record("Acme Mining", "AU"), record("Acme Retail", "US")];
        let pool = block_candidates(&records, "acme mining", Some("AU"));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].country, "AU");
    }

    #[test]
    fn country_filter_skipped_when_it_would_empty_pool() {
        let records = vec![record("Acme Mining", "AU")];
        let pool = block_candidates(&records, "acme mining", Some("ZZ"));
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn prefix_filter_narrows_on_first_token() {
        let records = vec![record("Acme Mining", "AU"), record("Zenith Mining", "AU")];
        let pool = block_candidates(&records, "acme mining", None);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].name, "Acme Mining");
    }
}
