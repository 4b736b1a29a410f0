//! Instrument resolution orchestration (`instrumentidentity.py::resolve_instrument`,
//! `topk_matches`; `instrumentapi.py::list_instruments`).

use entityidentity_core::resolver::decide_threshold;

use crate::blocking::block_candidates;
use crate::normalize::{normalize_instrument_name, normalize_ticker};
use crate::scoring::rank_instruments;
use crate::types::InstrumentRecord;

#[derive(Debug, Clone)]
pub struct InstrumentMatch<'a> {
    pub record: &'a InstrumentRecord,
    pub score: f64,
}

/// Resolve a ticker/name to its best candidate, or `None` if nothing clears
/// `threshold`. `source_hint` narrows by provider; `material_hint` boosts
/// candidates whose crosswalked material matches.
pub fn resolve_instrument<'a>(
    query: &str,
    records: &'a [InstrumentRecord],
    source_hint: Option<&str>,
    material_hint: Option<&str>,
    threshold: f64,
) -> Option<InstrumentMatch<'a>> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    let ticker_norm = normalize_ticker(trimmed);
    let name_norm = normalize_instrument_name(trimmed);
    if ticker_norm.is_empty() && name_norm.is_empty() {
        return None;
    }

    let pool = block_candidates(records, trimmed, &ticker_norm, &name_norm, source_hint);
    if pool.is_empty() {
        return None;
    }
    if pool.len() == 1 {
        let score = crate::scoring::score_candidate(pool[0], &ticker_norm, source_hint, material_hint);
        if score >= threshold {
            return Some(InstrumentMatch { record: pool[0], score });
        }
    }

    let ranked = rank_instruments(&pool, &ticker_norm, source_hint, material_hint);
    decide_threshold(&ranked, threshold).map(|scored| InstrumentMatch { record: scored.candidate, score: scored.score })
}

/// Top-K candidates regardless of threshold, for disambiguation UIs.
pub fn match_instruments<'a>(
    query: &str,
    records: &'a [InstrumentRecord],
    source_hint: Option<&str>,
    material_hint: Option<&str>,
    k: usize,
) -> Vec<InstrumentMatch<'a>> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let ticker_norm = normalize_ticker(trimmed);
    let name_norm = normalize_instrument_name(trimmed);

    let pool = block_candidates(records, trimmed, &ticker_norm, &name_norm, source_hint);
    let mut ranked = rank_instruments(&pool, &ticker_norm, source_hint, material_hint);
    ranked.truncate(k);
    ranked.into_iter().map(|s| InstrumentMatch { record: s.candidate, score: s.score }).collect()
}

/// `instrumentapi.py::list_instruments`: source filter plus a free-text
/// search over ticker, name, and material crosswalk.
pub fn list_instruments<'a>(records: &'a [InstrumentRecord], source: Option<&str>, search: Option<&str>) -> Vec<&'a InstrumentRecord> {
    let source_norm = source.map(normalize_ticker);
    let search_norm = search.map(|s| normalize_instrument_name(s));

    let mut filtered: Vec<&InstrumentRecord> = records
        .iter()
        .filter(|r| source_norm.as_deref().map_or(true, |s| r.provider_norm == s))
        .filter(|r| {
            search_norm.as_deref().map_or(true, |q| {
                r.ticker_norm.contains(q) || r.name_norm.contains(q) || r.material_key.as_deref().map_or(false, |m| m.contains(q))
            })
        })
        .collect();
    filtered.sort_by(|a, b| a.ticker.cmp(&b.ticker));
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(provider: &str, ticker: &str, name: &str, material_id: Option<&str>) -> InstrumentRecord {
        InstrumentRecord {
            instrument_id: entityidentity_core::id::instrument_id(&normalize_ticker(provider), &normalize_ticker(ticker)),
            provider: provider.to_string(),
            provider_norm: normalize_ticker(provider),
            ticker: ticker.to_string(),
            ticker_norm: normalize_ticker(ticker),
            instrument_name: Some(name.to_string()),
            name_norm: normalize_instrument_name(name),
            currency: None,
            unit: None,
            basis: None,
            material_id: material_id.map(str::to_string),
            material_key: material_id.map(str::to_string),
            cluster_id: None,
            aliases: vec![],
            aliases_norm: vec![],
        }
    }

    #[test]
    fn resolves_exact_ticker() {
        let records = vec![record("Fastmarkets", "MB-CO-0005", "Cobalt standard grade", Some("cobalt"))];
        let result = resolve_instrument("MB-CO-0005", &records, None, None, 90.0).unwrap();
        assert_eq!(result.record.ticker, "MB-CO-0005");
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn below_threshold_is_none() {
        let records = vec![record("Fastmarkets", "MB-CO-0005", "Cobalt standard grade", None)];
        assert!(resolve_instrument("completely unrelated text", &records, None, None, 90.0).is_none());
    }

    #[test]
    fn list_instruments_filters_by_source_and_search() {
        let records = vec![
            record("Fastmarkets", "MB-CO-0005", "Cobalt standard grade", Some("cobalt")),
            record("LME", "LME-AL-CASH", "Aluminium cash", Some("aluminium")),
        ];
        let filtered = list_instruments(&records, Some("Fastmarkets"), Some("cobalt"));
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].ticker, "MB-CO-0005");
    }
}
