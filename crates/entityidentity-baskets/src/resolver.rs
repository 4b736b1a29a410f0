//! Basket resolution orchestration (`baskets/basketidentity.py::resolve_basket`,
//! `topk_matches`; `baskets/basketapi.py::get_basket_components`).

use entityidentity_core::resolver::{decide_threshold, rank_candidates, top_k};
use entityidentity_core::wratio::best_score;

use crate::blocking::block_candidates;
use crate::normalize::normalize_basket_name;
use crate::types::BasketRecord;

#[derive(Debug, Clone)]
pub struct BasketMatch<'a> {
    pub record: &'a BasketRecord,
    pub score: f64,
}

fn score_candidate(record: &BasketRecord, query_norm: &str) -> f64 {
    let mut searchable: Vec<&str> = vec![record.name_norm.as_str()];
    searchable.extend(record.aliases_norm.iter().map(String::as_str));
    best_score(query_norm, searchable)
}

/// Resolve a basket name/alias to its best candidate, or `None` if nothing
/// clears `threshold` (spec.md §4.6, step 8; no gap-aware decision for
/// baskets — only companies get that).
pub fn resolve_basket<'a>(name: &str, records: &'a [BasketRecord], threshold: f64) -> Option<BasketMatch<'a>> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    let query_norm = normalize_basket_name(trimmed);
    if query_norm.is_empty() {
        return None;
    }

    let pool = block_candidates(records, trimmed, &query_norm);
    if pool.is_empty() {
        return None;
    }
    if pool.len() == 1 {
        let score = score_candidate(pool[0], &query_norm);
        if score >= threshold {
            return Some(BasketMatch { record: pool[0], score });
        }
    }

    let ranked = rank_candidates(&pool, |r| score_candidate(r, &query_norm));
    decide_threshold(&ranked, threshold).map(|scored| BasketMatch { record: scored.candidate, score: scored.score })
}

/// Top-K candidates regardless of threshold, for disambiguation UIs.
pub fn match_basket<'a>(name: &str, records: &'a [BasketRecord], k: usize) -> Vec<BasketMatch<'a>> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let query_norm = normalize_basket_name(trimmed);
    if query_norm.is_empty() {
        return Vec::new();
    }

    let pool = block_candidates(records, trimmed, &query_norm);
    let ranked = rank_candidates(&pool, |r| score_candidate(r, &query_norm));
    top_k(&ranked, k).into_iter().map(|s| BasketMatch { record: s.candidate, score: s.score }).collect()
}

/// `basketapi.py::list_baskets`: no filters, the namespace is flat and small.
pub fn list_baskets(records: &[BasketRecord]) -> Vec<&BasketRecord> {
    records.iter().collect()
}

/// `basketapi.py::get_basket_components`: just the symbols, weights dropped.
pub fn basket_component_symbols(record: &BasketRecord) -> Vec<&str> {
    record.components.iter().map(|c| c.symbol.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Component;

    fn record(name: &str, basket_id: &str, aliases: &[&str], components: &[&str]) -> BasketRecord {
        BasketRecord {
            basket_id: basket_id.to_string(),
            basket_key: crate::normalize::slugify_basket_name(name),
            name: name.to_string(),
            name_norm: normalize_basket_name(name),
            description: None,
            components: components.iter().map(|s| Component { symbol: s.to_string(), weight_pct: None }).collect(),
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            aliases_norm: aliases.iter().map(|a| normalize_basket_name(a)).collect(),
        }
    }

    #[test]
    fn resolves_exact_id() {
        let records = vec![record("PGM 4E", "PGM_4E", &[], &["Pt", "Pd", "Rh", "Au"])];
        let result = resolve_basket("PGM_4E", &records, 90.0).unwrap();
        assert_eq!(result.record.basket_id, "PGM_4E");
    }

    #[test]
    fn resolves_reordered_alias() {
        let records = vec![record("PGM 4E", "PGM_4E", &["4E PGM"], &["Pt", "Pd", "Rh", "Au"])];
        let result = resolve_basket("4e pgm", &records, 90.0).unwrap();
        assert_eq!(result.record.basket_id, "PGM_4E");
    }

    #[test]
    fn below_threshold_is_none() {
        let records = vec![record("PGM 4E", "PGM_4E", &[], &[])];
        assert!(resolve_basket("completely unrelated text", &records, 90.0).is_none());
    }

    #[test]
    fn component_symbols_drop_weights() {
        let record = record("Battery Pack", "BATTERY_PACK", &[], &["Li", "Co", "Ni"]);
        assert_eq!(basket_component_symbols(&record), vec!["Li", "Co", "Ni"]);
    }
}
