//! Generic, domain-parameterised blocking engine (spec.md §4.4).
//!
//! A blocker is a cheap filter applied in sequence to shrink the candidate
//! pool before expensive fuzzy scoring. Domain crates build their own
//! blocker sequences (equality on country, prefix on `name_norm`, pattern
//! match on instrument tickers, ...) out of plain closures and hand them to
//! [`run_blockers`].

/// One stage of the blocking pipeline.
pub struct Blocker<'a, T> {
    /// Name for diagnostics/tracing only.
    pub name: &'static str,
    /// If this blocker narrows the pool to exactly one candidate, and it is
    /// marked high-confidence (equality on symbol/ticker/basket_id/id), the
    /// engine short-circuits and returns that candidate immediately
    /// (spec.md §4.4 short-circuit rule).
    pub exact_high_confidence: bool,
    pub filter: Box<dyn Fn(&T) -> bool + 'a>,
}

impl<'a, T> Blocker<'a, T> {
    pub fn new(name: &'static str, exact_high_confidence: bool, filter: impl Fn(&T) -> bool + 'a) -> Self {
        Blocker {
            name,
            exact_high_confidence,
            filter: Box::new(filter),
        }
    }
}

/// Outcome of running the blocker sequence: either an early, high-confidence
/// single candidate, or the narrowed pool to hand to the fuzzy scorer.
pub enum BlockOutcome<'a, T> {
    ShortCircuit(&'a T),
    Pool(Vec<&'a T>),
}

/// Apply blockers in order. Each blocker narrows the running pool; if a
/// blocker would empty the pool, it is skipped and the pool carries over
/// unchanged (spec.md §4.4: "fall back to the input to that blocker, avoids
/// over-filtering on sparse prefixes"). If a blocker narrows the pool to
/// exactly one candidate and is marked high-confidence, stop immediately.
pub fn run_blockers<'a, T>(candidates: &[&'a T], blockers: &[Blocker<'_, T>]) -> BlockOutcome<'a, T> {
    let mut pool: Vec<&'a T> = candidates.to_vec();
    for blocker in blockers {
        let filtered: Vec<&'a T> = pool.iter().copied().filter(|c| (blocker.filter)(c)).collect();
        if filtered.len() == 1 && blocker.exact_high_confidence {
            tracing::debug!(blocker = blocker.name, "blocking short-circuit");
            return BlockOutcome::ShortCircuit(filtered[0]);
        }
        if filtered.is_empty() {
            tracing::trace!(blocker = blocker.name, "blocker would empty pool, skipping");
            continue;
        }
        pool = filtered;
    }
    BlockOutcome::Pool(pool)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        country: &'static str,
    }

    #[test]
    fn narrows_pool_across_stages() {
        let rows = vec![
            Row { name: "acme", country: "AU" },
            Row { name: "acme mining", country: "AU" },
            Row { name: "beta", country: "US" },
        ];
        let refs: Vec<&Row> = rows.iter().collect();
        let blockers = vec![
            Blocker::new("country", false, |r: &Row| r.country == "AU"),
            Blocker::new("prefix", false, |r: &Row| r.name.starts_with("acme")),
        ];
        match run_blockers(&refs, &blockers) {
            BlockOutcome::Pool(pool) => assert_eq!(pool.len(), 2),
            BlockOutcome::ShortCircuit(_) => panic!("unexpected short circuit"),
        }
    }

    #[test]
    fn short_circuits_on_exact_single_match() {
        let rows = vec![
            Row { name: "acme", country: "AU" },
            Row { name: "beta", country: "US" },
        ];
        let refs: Vec<&Row> = rows.iter().collect();
        let blockers = vec![Blocker::new("symbol", true, |r: &Row| r.name == "beta")];
        match run_blockers(&refs, &blockers) {
            BlockOutcome::ShortCircuit(row) => assert_eq!(row.name, "beta"),
            BlockOutcome::Pool(_) => panic!("expected short circuit"),
        }
    }

    #[test]
    fn empty_stage_falls_back_instead_of_losing_pool() {
        let rows = vec![Row { name: "acme", country: "AU" }];
        let refs: Vec<&Row> = rows.iter().collect();
        let blockers = vec![Blocker::new("too-narrow", false, |r: &Row| r.name == "nothing-matches")];
        match run_blockers(&refs, &blockers) {
            BlockOutcome::Pool(pool) => assert_eq!(pool.len(), 1),
            BlockOutcome::ShortCircuit(_) => panic!("unexpected short circuit"),
        }
    }
}
