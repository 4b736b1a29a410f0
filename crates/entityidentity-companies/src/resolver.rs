//! Company resolution orchestration (`companies/companyresolver.py`):
//! block, score, rank, and apply the gap-aware decision.

use entityidentity_core::resolver::{company_decision, top_k, CompanyDecision};

use crate::blocking::block_candidates;
use crate::normalize::normalize_company_name;
use crate::scoring::{explain_candidate, rank_companies, Explain};
use crate::types::CompanyRecord;

#[derive(Debug, Clone)]
pub struct CompanyMatch<'a> {
    pub record: &'a CompanyRecord,
    pub explain: Explain,
}

#[derive(Debug, Clone)]
pub struct ResolveResult<'a> {
    pub query: String,
    pub matches: Vec<CompanyMatch<'a>>,
    pub decision: CompanyDecision,
}

impl<'a> ResolveResult<'a> {
    pub fn best(&self) -> Option<&CompanyMatch<'a>> {
        self.matches.first()
    }
}

/// Resolve `name` against `records`, optionally narrowed by `country` (ISO2).
/// Mirrors `resolve_company`'s `k=5` default candidate list and the
/// high-confidence/uncertain/no-match cascade from spec.md §4.6.
pub fn resolve_company<'a>(
    name: &str,
    records: &'a [CompanyRecord],
    country: Option<&str>,
    high_conf_threshold: f64,
    high_conf_gap: f64,
    uncertain_threshold: f64,
) -> ResolveResult<'a> {
    let query_norm = normalize_company_name(name);
    let pool = block_candidates(records, &query_norm, country);
    let ranked = rank_companies(&pool, &query_norm, country);
    let top = top_k(&ranked, 5);

    let matches: Vec<CompanyMatch<'a>> = top
        .iter()
        .map(|scored| CompanyMatch {
            record: scored.candidate,
            explain: explain_candidate(scored.candidate, &query_norm, country),
        })
        .collect();

    let best = matches.first().map(|m| m.explain.score).unwrap_or(0.0);
    let second = matches.get(1).map(|m| m.explain.score).unwrap_or(0.0);
    let decision = company_decision(best, second, high_conf_threshold, high_conf_gap, uncertain_threshold);

    ResolveResult {
        query: name.to_string(),
        matches,
        decision,
    }
}

/// Top-K candidates regardless of threshold, for review UIs
/// (`companyresolver.py::match_company`).
pub fn match_company<'a>(name: &str, records: &'a [CompanyRecord], k: usize, country: Option<&str>) -> Vec<CompanyMatch<'a>> {
    let query_norm = normalize_company_name(name);
    let pool = block_candidates(records, &query_norm, country);
    let ranked = rank_companies(&pool, &query_norm, country);
    top_k(&ranked, k)
        .iter()
        .map(|scored| CompanyMatch {
            record: scored.candidate,
            explain: explain_candidate(scored.candidate, &query_norm, country),
        })
        .collect()
}

/// `companyresolver.py::list_companies`: country filter plus case-insensitive
/// name/name_norm substring search.
pub fn list_companies<'a>(records: &'a [CompanyRecord], country: Option<&str>, search: Option<&str>, limit: Option<usize>) -> Vec<&'a CompanyRecord> {
    let country = country.map(str::to_uppercase);
    let search_lower = search.map(str::to_lowercase);

    let mut out: Vec<&CompanyRecord> = records
        .iter()
        .filter(|r| country.as_deref().map_or(true, |c| r.country == c))
        .filter(|r| {
            search_lower
                .as_deref()
                .map_or(true, |s| r.name.to_lowercase().contains(s) || r.name_norm.contains(s))
        })
        .collect();

    if let Some(limit) = limit {
        out.truncate(limit);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, country: &str) -> CompanyRecord {
        CompanyRecord {
            name: name.to_string(),
            name_norm: normalize_company_name(name),
            country: country.to_string(),
            lei: None,
            aliases: vec![],
            aliases_norm: vec![],
        }
    }

    #[test]
    fn exact_match_is_auto_high_conf() {
        let records = vec![record("Acme Mining Corp", "AU"), record("Zenith Holdings", "US")];
        let result = resolve_company("Acme Mining Corp", &records, Some("AU"), 88.0, 6.0, 76.0);
        assert_eq!(result.decision, CompanyDecision::AutoHighConf);
        assert_eq!(result.best().unwrap().record.name, "Acme Mining Corp");
    }

    #[test]
    fn no_candidates_is_no_match() {
        let records = vec![record("Zenith Holdings", "US")];
        let result = resolve_company("Completely Unrelated Entity Name", &records, None, 88.0, 6.0, 76.0);
        assert_eq!(result.decision, CompanyDecision::NoMatch);
    }

    #[test]
    fn list_companies_filters_by_country_and_search() {
        let records = vec![record("Acme Mining", "AU"), record("Acme Retail", "US")];
        let filtered = list_companies(&records, Some("AU"), Some("mining"), None);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name, "Acme Mining");
    }
}
