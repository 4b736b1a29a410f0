//! Metal scoring (`metals/metalidentity.py::_score_candidate`): best WRatio
//! across the canonical name and every alias.

use entityidentity_core::resolver::{rank_candidates, Scored};
use entityidentity_core::wratio::best_score;

use crate::types::MetalRecord;

pub fn score_candidate(record: &MetalRecord, query_norm: &str) -> f64 {
    let mut searchable: Vec<&str> = vec![record.name_norm.as_str()];
    searchable.extend(record.aliases_norm.iter().map(String::as_str));
    best_score(query_norm, searchable)
}

pub fn rank_metals<'a>(pool: &[&'a MetalRecord], query_norm: &str) -> Vec<Scored<'a, MetalRecord>> {
    rank_candidates(pool, |r| score_candidate(r, query_norm))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, aliases: &[&str]) -> MetalRecord {
        MetalRecord {
            metal_id: entityidentity_core::id::metal_id(&crate::normalize::normalize_metal_name(name)),
            metal_key: crate::normalize::slugify_metal_name(name),
            symbol: None,
            name: name.to_string(),
            name_norm: crate::normalize::normalize_metal_name(name),
            formula: None,
            code: None,
            category_bucket: None,
            cluster_id: None,
            default_unit: None,
            default_basis: None,
            aliases: aliases.iter().map(|a| a.to_string()).collect(),
            aliases_norm: aliases.iter().map(|a| crate::normalize::normalize_metal_name(a)).collect(),
        }
    }

    #[test]
    fn exact_name_scores_100() {
        let r = record("Platinum", &[]);
        assert_eq!(score_candidate(&r, "platinum"), 100.0);
    }

    #[test]
    fn alias_match_counts() {
        let r = record("Ammonium Paratungstate", &["APT"]);
        let score = score_candidate(&r, "apt");
        assert!(score >= 90.0);
    }
}
