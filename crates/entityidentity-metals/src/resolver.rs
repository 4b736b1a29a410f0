//! Metal resolution orchestration (`metals/metalidentity.py::resolve_metal`,
//! `topk_matches`).

use crate::blocking::block_candidates;
use crate::normalize::{normalize_metal_name, parse_metal_form_hint};
use crate::scoring::{rank_metals, score_candidate};
use crate::types::MetalRecord;
use entityidentity_core::blocking::{run_blockers, BlockOutcome, Blocker};
use entityidentity_core::resolver::decide_threshold;

#[derive(Debug, Clone)]
pub struct MetalMatch<'a> {
    pub record: &'a MetalRecord,
    pub score: f64,
}

/// Resolve a metal name/symbol/form to its best candidate, or `None` if
/// nothing clears `threshold`. Supports `"metal:form"` query syntax.
pub fn resolve_metal<'a>(
    name: &str,
    records: &'a [MetalRecord],
    cluster: Option<&str>,
    category: Option<&str>,
    threshold: f64,
) -> Option<MetalMatch<'a>> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return None;
    }
    let (metal_part, form_hint) = parse_metal_form_hint(trimmed);
    let query_norm = normalize_metal_name(&metal_part);
    if query_norm.is_empty() {
        return None;
    }

    let pool = block_candidates(records, &query_norm, form_hint.as_deref(), cluster, category);
    if pool.is_empty() {
        return None;
    }

    let ranked = rank_metals(&pool, &query_norm);
    decide_threshold(&ranked, threshold).map(|scored| MetalMatch { record: scored.candidate, score: scored.score })
}

/// Top-K candidates regardless of threshold, using broader blocking (prefix
/// and form hint only, no cluster/category) for review UIs.
pub fn match_metal<'a>(name: &str, records: &'a [MetalRecord], k: usize) -> Vec<MetalMatch<'a>> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Vec::new();
    }
    let (metal_part, form_hint) = parse_metal_form_hint(trimmed);
    let query_norm = normalize_metal_name(&metal_part);
    if query_norm.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<&MetalRecord> = records.iter().collect();
    let prefix = prefix3(&query_norm);
    let form_norm = form_hint.map(|f| normalize_metal_name(&f));

    let blockers: Vec<Blocker<MetalRecord>> = vec![
        Blocker::new("name_prefix", false, move |r: &MetalRecord| {
            prefix.as_deref().map_or(true, |p| r.name_norm.starts_with(p))
        }),
        Blocker::new("form_hint", false, move |r: &MetalRecord| {
            form_norm.as_deref().map_or(true, |f| r.name_norm.contains(f))
        }),
    ];
    let pool = match run_blockers(&candidates, &blockers) {
        BlockOutcome::ShortCircuit(row) => vec![row],
        BlockOutcome::Pool(pool) => pool,
    };

    let mut scored: Vec<MetalMatch<'a>> = pool
        .into_iter()
        .map(|r| MetalMatch { record: r, score: score_candidate(r, &query_norm) })
        .collect();
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored.truncate(k);
    scored
}

fn prefix3(query_norm: &str) -> Option<&str> {
    if query_norm.chars().count() < 3 {
        return None;
    }
    let end = query_norm.char_indices().nth(3).map(|(i, _)| i).unwrap_or(query_norm.len());
    Some(&query_norm[..end])
}

/// `metalapi.py::list_metals`: cluster and/or category filters.
pub fn list_metals<'a>(records: &'a [MetalRecord], cluster: Option<&str>, category: Option<&str>) -> Vec<&'a MetalRecord> {
    records
        .iter()
        .filter(|r| cluster.map_or(true, |c| r.cluster_id.as_deref() == Some(c)))
        .filter(|r| category.map_or(true, |c| r.category_bucket.as_deref() == Some(c)))
        .collect()
}
