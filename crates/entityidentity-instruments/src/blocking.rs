//! Instrument blocking cascade (`instruments/instrumentidentity.py::_build_candidate_pool`):
//! ticker-pattern source detection, explicit source hint, ticker exact/prefix,
//! then a name-prefix fallback when the pool is still too big.

use once_cell::sync::Lazy;
use regex::Regex;

use entityidentity_core::blocking::{run_blockers, BlockOutcome, Blocker};

use crate::types::InstrumentRecord;

const NAME_FALLBACK_THRESHOLD: usize = 100;

/// `instrumentidentity.py::TICKER_PATTERNS`: the provider each ticker shape
/// implies, used to narrow the pool before any fuzzy scoring runs.
static TICKER_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    vec![
        ("Fastmarkets", Regex::new(r"^MB-[A-Z0-9]+-\d+$").unwrap()),
        ("LME", Regex::new(r"^LME[_-][A-Z]{2,3}[_-]\w+$").unwrap()),
        ("CME", Regex::new(r"^[A-Z]{1,3}\d*$").unwrap()),
        ("Bloomberg", Regex::new(r"^[A-Z]{2,6}(Y|[0-9])?$").unwrap()),
        ("Argus", Regex::new(r"^PA\d{7}$").unwrap()),
    ]
});

/// Returns the provider implied by a raw ticker's shape, if any pattern
/// matches. Only used to narrow blocking, never to reject a candidate.
fn detect_ticker_pattern(raw_ticker: &str) -> Option<&'static str> {
    TICKER_PATTERNS.iter().find(|(_, re)| re.is_match(raw_ticker)).map(|(source, _)| *source)
}

fn prefix_n(s: &str, n: usize) -> Option<&str> {
    if s.chars().count() < n {
        return None;
    }
    let end = s.char_indices().nth(n).map(|(i, _)| i).unwrap_or(s.len());
    Some(&s[..end])
}

pub fn block_candidates<'a>(
    records: &'a [InstrumentRecord],
    raw_ticker: &str,
    ticker_norm: &str,
    name_norm: &str,
    source_hint: Option<&str>,
) -> Vec<&'a InstrumentRecord> {
    let candidates: Vec<&InstrumentRecord> = records.iter().collect();

    // Step 1: exact ticker_norm match, short-circuits when unique.
    let exact_ticker = ticker_norm.to_string();
    let exact_blocker: Blocker<InstrumentRecord> =
        Blocker::new("ticker_exact", true, move |r: &InstrumentRecord| r.ticker_norm == exact_ticker);
    if let BlockOutcome::ShortCircuit(row) = run_blockers(&candidates, std::slice::from_ref(&exact_blocker)) {
        return vec![row];
    }

    let pattern_source = detect_ticker_pattern(raw_ticker).map(str::to_string);
    let explicit_source = source_hint.map(|s| crate::normalize::normalize_ticker(s));
    let ticker_prefix = prefix_n(ticker_norm, 3).map(str::to_string);

    let blockers: Vec<Blocker<InstrumentRecord>> = vec![
        Blocker::new("source_hint", false, move |r: &InstrumentRecord| {
            explicit_source.as_deref().map_or(true, |s| r.provider_norm == s)
        }),
        Blocker::new("pattern_source", false, move |r: &InstrumentRecord| {
            pattern_source.as_deref().map_or(true, |s| r.provider_norm == crate::normalize::normalize_ticker(s))
        }),
        Blocker::new("ticker_prefix", false, move |r: &InstrumentRecord| {
            ticker_prefix.as_deref().map_or(true, |p| r.ticker_norm.starts_with(p))
        }),
    ];

    let pool = match run_blockers(&candidates, &blockers) {
        BlockOutcome::ShortCircuit(row) => vec![row],
        BlockOutcome::Pool(pool) => pool,
    };

    // Step 4: if the ticker-side cascade still leaves a wide pool, fall back
    // to name prefix narrowing (instrumentidentity.py's >100-row fallback).
    if pool.len() > NAME_FALLBACK_THRESHOLD {
        if let Some(prefix) = prefix_n(name_norm, 4) {
            let narrowed: Vec<&InstrumentRecord> = pool.iter().copied().filter(|r| r.name_norm.contains(prefix)).collect();
            if !narrowed.is_empty() {
                return narrowed;
            }
        }
    }

    pool
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(provider: &str, ticker: &str, name: &str) -> InstrumentRecord {
        InstrumentRecord {
            instrument_id: entityidentity_core::id::instrument_id(
                &crate::normalize::normalize_ticker(provider),
                &crate::normalize::normalize_ticker(ticker),
            ),
            provider: provider.to_string(),
            provider_norm: crate::normalize::normalize_ticker(provider),
            ticker: ticker.to_string(),
            ticker_norm: crate::normalize::normalize_ticker(ticker),
            instrument_name: Some(name.to_string()),
            name_norm: crate::normalize::normalize_instrument_name(name),
            currency: None,
            unit: None,
            basis: None,
            material_id: None,
            material_key: None,
            cluster_id: None,
            aliases: vec![],
            aliases_norm: vec![],
        }
    }

    #[test]
    fn exact_ticker_short_circuits() {
        let records = vec![record("Fastmarkets", "MB-CO-0005", "Cobalt standard grade"), record("LME", "LME-AL-CASH", "Aluminium cash")];
        let pool = block_candidates(&records, "MB-CO-0005", "mb-co-0005", "", None);
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].ticker, "MB-CO-0005");
    }

    #[test]
    fn pattern_detection_prefers_matching_provider() {
        let records = vec![record("Fastmarkets", "MB-CO-0006", "Cobalt alloy grade"), record("LME", "LME-CO-CASH", "Cobalt cash")];
        let pool = block_candidates(&records, "MB-CO-0007", "mb-co-0007", "cobalt", None);
        assert!(pool.iter().all(|r| r.provider == "Fastmarkets"));
    }

    #[test]
    fn explicit_source_hint_filters_pool() {
        let records = vec![record("Fastmarkets", "MB-CO-0006", "Cobalt alloy"), record("LME", "LME-CO-CASH", "Cobalt cash")];
        let pool = block_candidates(&records, "unrelated", "unrelated", "cobalt", Some("LME"));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].provider, "LME");
    }
}
