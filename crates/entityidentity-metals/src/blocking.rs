//! Metal blocking cascade (`metals/metalidentity.py::_build_candidate_pool`):
//! exact symbol short-circuit, category bucket, name prefix, supply-chain
//! cluster, then an optional "metal:form" hint filter.

use entityidentity_core::blocking::{run_blockers, BlockOutcome, Blocker};

use crate::types::MetalRecord;

const MAX_CANDIDATES: usize = 50_000;

pub fn block_candidates<'a>(
    records: &'a [MetalRecord],
    query_norm: &str,
    form_hint: Option<&str>,
    cluster: Option<&str>,
    category: Option<&str>,
) -> Vec<&'a MetalRecord> {
    let candidates: Vec<&MetalRecord> = records.iter().collect();

    // Step 1: exact symbol match, short queries only, short-circuits when
    // it narrows to exactly one candidate.
    if query_norm.chars().count() <= 3 {
        let symbol_blocker: Blocker<MetalRecord> = Blocker::new("symbol", true, move |r: &MetalRecord| {
            r.symbol.as_deref().map_or(false, |s| s.eq_ignore_ascii_case(query_norm))
        });
        if let BlockOutcome::ShortCircuit(row) = run_blockers(&candidates, std::slice::from_ref(&symbol_blocker)) {
            return vec![row];
        }
    }

    let category = category.map(str::to_string);
    let prefix = prefix3(query_norm);
    let cluster = cluster.map(str::to_string);
    let form_norm = form_hint.map(crate::normalize::normalize_metal_name);

    let blockers: Vec<Blocker<MetalRecord>> = vec![
        Blocker::new("category", false, move |r: &MetalRecord| {
            category.as_deref().map_or(true, |c| r.category_bucket.as_deref() == Some(c))
        }),
        Blocker::new("name_prefix", false, move |r: &MetalRecord| {
            prefix.as_deref().map_or(true, |p| {
                r.name_norm.starts_with(p) || r.aliases_norm.iter().any(|a| a.starts_with(p))
            })
        }),
        Blocker::new("cluster", false, move |r: &MetalRecord| {
            cluster.as_deref().map_or(true, |c| r.cluster_id.as_deref() == Some(c))
        }),
        Blocker::new("form_hint", false, move |r: &MetalRecord| {
            form_norm.as_deref().map_or(true, |f| r.name_norm.contains(f))
        }),
    ];

    let pool = match run_blockers(&candidates, &blockers) {
        BlockOutcome::ShortCircuit(row) => vec![row],
        BlockOutcome::Pool(pool) => pool,
    };

    pool.into_iter().take(MAX_CANDIDATES).collect()
}

fn prefix3(query_norm: &str) -> Option<&str> {
    if query_norm.chars().count() < 3 {
        return None;
    }
    let end = query_norm.char_indices().nth(3).map(|(i, _)| i).unwrap_or(query_norm.len());
    Some(&query_norm[..end])
}
