//! Basket blocking cascade (`baskets/basketidentity.py::_build_candidate_pool`):
//! exact `basket_id` short-circuit, then name prefix over a flat namespace
//! (no category/cluster stage — baskets are a small, unclustered set).

use entityidentity_core::blocking::{run_blockers, BlockOutcome, Blocker};

use crate::types::BasketRecord;

/// A query that looks like a basket id: upper-case letters/digits/underscore
/// with at least one underscore (`"PGM_4E"`, `"BATTERY_PACK"`), matching the
/// Python original's `query_norm.replace("_", "").replace(" ", "").isupper()`
/// check performed against the *raw* (not match-normalized) query.
fn looks_like_basket_id(raw_query: &str) -> bool {
    let trimmed = raw_query.trim();
    trimmed.contains('_')
        && trimmed.chars().any(|c| c.is_alphabetic())
        && trimmed.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

pub fn block_candidates<'a>(records: &'a [BasketRecord], raw_query: &str, query_norm: &str) -> Vec<&'a BasketRecord> {
    let candidates: Vec<&BasketRecord> = records.iter().collect();

    if looks_like_basket_id(raw_query) {
        let id_upper = raw_query.trim().to_uppercase();
        let id_blocker: Blocker<BasketRecord> =
            Blocker::new("basket_id", true, move |r: &BasketRecord| r.basket_id.eq_ignore_ascii_case(&id_upper));
        if let BlockOutcome::ShortCircuit(row) = run_blockers(&candidates, std::slice::from_ref(&id_blocker)) {
            return vec![row];
        }
    }

    let prefix = prefix3(query_norm);
    let blockers: Vec<Blocker<BasketRecord>> = vec![Blocker::new("name_prefix", false, move |r: &BasketRecord| {
        prefix.as_deref().map_or(true, |p| r.name_norm.starts_with(p) || r.aliases_norm.iter().any(|a| a.starts_with(p)))
    })];

    match run_blockers(&candidates, &blockers) {
        BlockOutcome::ShortCircuit(row) => vec![row],
        BlockOutcome::Pool(pool) => pool,
    }
}

fn prefix3(query_norm: &str) -> Option<&str> {
    if query_norm.chars().count() < 3 {
        return None;
    }
    let end = query_norm.char_indices().nth(3).map(|(i, _)| i).unwrap_or(query_norm.len());
    Some(&query_norm[..end])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, basket_id: &str) -> BasketRecord {
        BasketRecord {
            basket_id: basket_id.to_string(),
            basket_key: crate::normalize::slugify_basket_name(name),
            name: name.to_string(),
            name_norm: crate::normalize::normalize_basket_name(name),
            description: None,
            components: vec![],
            aliases: vec![],
            aliases_norm: vec![],
        }
    }

    #[test]
    fn exact_basket_id_short_circuits() {
        let records = vec![record("PGM 4E", "PGM_4E"), record("PGM 5E", "PGM_5E")];
        let pool = block_candidates(&records, "PGM_4E", &crate::normalize::normalize_basket_name("PGM_4E"));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].basket_id, "PGM_4E");
    }

    #[test]
    fn plain_name_is_not_treated_as_id() {
        assert!(!looks_like_basket_id("PGM 4E"));
        assert!(looks_like_basket_id("PGM_4E"));
    }

    #[test]
    fn prefix_narrows_pool() {
        let records = vec![record("PGM 4E", "PGM_4E"), record("Battery Pack", "BATTERY_PACK")];
        let pool = block_candidates(&records, "pgm", &crate::normalize::normalize_basket_name("pgm"));
        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].name, "PGM 4E");
    }
}
