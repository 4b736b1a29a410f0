//! Instrument scoring (`instrumentidentity.py::_score_candidate`,
//! `_get_searchable_text`): WRatio over ticker/name/aliases, plus a source
//! boost and a material-hint substring boost.

use entityidentity_core::resolver::{rank_candidates, Scored};
use entityidentity_core::wratio::best_score;

use crate::types::InstrumentRecord;

const SOURCE_BOOST: f64 = 5.0;
const MATERIAL_BOOST: f64 = 2.0;

fn searchable_text(record: &InstrumentRecord) -> Vec<&str> {
    let mut text: Vec<&str> = vec![record.ticker_norm.as_str(), record.name_norm.as_str()];
    text.extend(record.aliases_norm.iter().map(String::as_str));
    text
}

pub fn score_candidate(record: &InstrumentRecord, query_norm: &str, source_hint: Option<&str>, material_hint: Option<&str>) -> f64 {
    let mut score = best_score(query_norm, searchable_text(record));

    if let Some(source) = source_hint {
        if record.provider_norm == crate::normalize::normalize_ticker(source) {
            score += SOURCE_BOOST;
        }
    }
    if let Some(material) = material_hint {
        let material_norm = crate::normalize::normalize_instrument_name(material);
        if record.material_key.as_deref() == Some(material_norm.as_str()) || record.name_norm.contains(&material_norm) {
            score += MATERIAL_BOOST;
        }
    }

    score.min(100.0)
}

pub fn rank_instruments<'a>(
    pool: &[&'a InstrumentRecord],
    query_norm: &str,
    source_hint: Option<&str>,
    material_hint: Option<&str>,
) -> Vec<Scored<'a, InstrumentRecord>> {
    rank_candidates(pool, |r| score_candidate(r, query_norm, source_hint, material_hint))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(provider: &str, ticker: &str, name: &str, material_id: Option<&str>, material_key: Option<&str>) -> InstrumentRecord {
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
            material_id: material_id.map(str::to_string),
            material_key: material_key.map(str::to_string),
            cluster_id: None,
            aliases: vec![],
            aliases_norm: vec![],
        }
    }

    #[test]
    fn exact_ticker_scores_100() {
        let r = record("Fastmarkets", "MB-CO-0005", "Cobalt standard grade", None, None);
        assert_eq!(score_candidate(&r, "mb-co-0005", None, None), 100.0);
    }

    #[test]
    fn matching_source_hint_boosts_score() {
        let r = record("LME", "LME-AL-CASH", "Aluminium cash", None, None);
        let base = score_candidate(&r, "lme-al-cash", None, None);
        let boosted = score_candidate(&r, "lme-al-cash", Some("LME"), None);
        assert!(boosted >= base);
    }

    #[test]
    fn boost_never_exceeds_100() {
        let r = record("LME", "LME-AL-CASH", "Aluminium cash", Some("aluminium"), Some("aluminium"));
        let score = score_candidate(&r, "lme-al-cash", Some("LME"), Some("aluminium"));
        assert!(score <= 100.0);
    }

    /// Crosswalk-fallback instruments carry a SHA-1 `material_id`, not plain
    /// text — the boost must key off `material_key` (the metal's
    /// `name_norm`), not `material_id`, or this path never boosts.
    #[test]
    fn material_hint_boosts_via_crosswalk_fallback_key() {
        let hash = entityidentity_core::id::metal_id("cobalt");
        // Name deliberately doesn't contain "cobalt", so the only way this
        // can boost is via the material_key branch, not the substring one.
        let r = record("LME", "LME-BATT-CASH", "Battery metals cash", Some(&hash), Some("cobalt"));
        let base = score_candidate(&r, "lme-batt-cash", None, None);
        let boosted = score_candidate(&r, "lme-batt-cash", None, Some("cobalt"));
        assert!(boosted > base);
    }
}
