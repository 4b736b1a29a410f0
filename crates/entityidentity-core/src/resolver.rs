//! Generic per-domain resolution helpers (spec.md §4.6): scoring a pool of
//! candidates, ranking them, and deciding whether the top score clears a
//! threshold. Domain crates call these after running their own blocker
//! sequence (`blocking::run_blockers`); the company resolver layers its own
//! gap-aware decision on top (`company_decision`).

/// A candidate paired with its fuzzy score, out of [`rank_candidates`].
#[derive(Debug, Clone, Copy)]
pub struct Scored<'a, T> {
    pub candidate: &'a T,
    pub score: f64,
}

/// Score every candidate with `score_fn` and sort descending by score.
/// Ties keep the input pool's relative order (stable sort).
pub fn rank_candidates<'a, T>(pool: &[&'a T], score_fn: impl Fn(&T) -> f64) -> Vec<Scored<'a, T>> {
    let mut scored: Vec<Scored<'a, T>> = pool
        .iter()
        .map(|c| Scored {
            candidate: *c,
            score: score_fn(c),
        })
        .collect();
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));
    scored
}

/// Default, single-threshold decision: top candidate if its score clears
/// `threshold`, else none (spec.md §4.6 step 8).
pub fn decide_threshold<'a, T>(ranked: &[Scored<'a, T>], threshold: f64) -> Option<Scored<'a, T>> {
    ranked.first().filter(|top| top.score >= threshold).copied()
}

/// Top-K candidates for `match_*` (spec.md §4.6: "skips blocking beyond
/// country/source-hint, scores the full filtered pool, returns top-K").
pub fn top_k<'a, T>(ranked: &[Scored<'a, T>], k: usize) -> Vec<Scored<'a, T>> {
    ranked.iter().take(k).copied().collect()
}

/// Default thresholds for the company resolver (spec.md §4.6).
pub const HIGH_CONF_THRESHOLD: f64 = 88.0;
pub const HIGH_CONF_GAP: f64 = 6.0;
pub const UNCERTAIN_THRESHOLD: f64 = 76.0;

/// Outcome of the company-specific gap-aware decision (spec.md §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompanyDecision {
    AutoHighConf,
    NeedsHintOrLlm,
    NoMatch,
}

/// Decide among the top two scores using the company resolver's
/// high-confidence/uncertain/no-match cascade. `second` should be `0.0` if
/// there was only one candidate.
pub fn company_decision(
    best: f64,
    second: f64,
    high_conf_threshold: f64,
    high_conf_gap: f64,
    uncertain_threshold: f64,
) -> CompanyDecision {
    let gap = best - second;
    if best >= high_conf_threshold && gap >= high_conf_gap {
        CompanyDecision::AutoHighConf
    } else if best >= uncertain_threshold {
        CompanyDecision::NeedsHintOrLlm
    } else {
        CompanyDecision::NoMatch
    }
}
