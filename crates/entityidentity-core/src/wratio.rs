//! Fuzzy string scorer (spec.md §4.5).
//!
//! Rust has no drop-in RapidFuzz port, so `WRatio` is reconstructed from
//! `strsim` primitives composed the way `fuzzywuzzy`/`rapidfuzz` define it:
//! the maximum of a full-string ratio, a partial (best-substring-alignment)
//! ratio, a token-sort ratio and a token-set ratio, with the partial-family
//! scores discounted when the two strings' lengths diverge substantially
//! (spec.md §4.5: "partial metrics scaled down by a small constant penalty
//! when string lengths differ substantially").

/// Weighted fuzzy-match score in `0.0..=100.0`.
pub fn wratio(s1: &str, s2: &str) -> f64 {
    if s1.is_empty() || s2.is_empty() {
        return 0.0;
    }
    if s1 == s2 {
        return 100.0;
    }

    let base = ratio(s1, s2);
    let len_ratio = s1.chars().count().max(s2.chars().count()) as f64
        / s1.chars().count().min(s2.chars().count()).max(1) as f64;

    // Strings close in length: pure full/token comparisons are reliable.
    if len_ratio < 1.5 {
        let tsor = token_sort_ratio(s1, s2);
        let tser = token_set_ratio(s1, s2);
        return base.max(tsor).max(tser);
    }

    // Lengths diverge: partial-alignment scores become meaningful but are
    // discounted, more so the more the lengths diverge.
    let partial_scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
    let partial = partial_ratio(s1, s2) * partial_scale;
    let ptsor = partial_token_sort_ratio(s1, s2) * partial_scale;
    let ptser = partial_token_set_ratio(s1, s2) * partial_scale;
    base.max(partial).max(ptsor).max(ptser)
}

/// Full-string similarity ratio in `0..=100`, via normalized Levenshtein
/// similarity (`strsim::normalized_levenshtein` already returns `0.0..=1.0`
/// similarity, not distance).
fn ratio(s1: &str, s2: &str) -> f64 {
    strsim::normalized_levenshtein(s1, s2) * 100.0
}

/// Best-aligned-substring ratio: slide the shorter string across the
/// longer and take the best windowed `ratio`.
fn partial_ratio(s1: &str, s2: &str) -> f64 {
    let (shorter, longer): (Vec<char>, Vec<char>) = if s1.chars().count() <= s2.chars().count() {
        (s1.chars().collect(), s2.chars().collect())
    } else {
        (s2.chars().collect(), s1.chars().collect())
    };
    if shorter.is_empty() {
        return 0.0;
    }
    if shorter.len() >= longer.len() {
        return ratio(s1, s2);
    }
    let shorter_s: String = shorter.iter().collect();
    let mut best = 0.0f64;
    for start in 0..=(longer.len() - shorter.len()) {
        let window: String = longer[start..start + shorter.len()].iter().collect();
        let score = ratio(&shorter_s, &window);
        if score > best {
            best = score;
        }
        if best >= 100.0 {
            break;
        }
    }
    best
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn token_sort_ratio(s1: &str, s2: &str) -> f64 {
    ratio(&sorted_tokens(s1), &sorted_tokens(s2))
}

fn partial_token_sort_ratio(s1: &str, s2: &str) -> f64 {
    partial_ratio(&sorted_tokens(s1), &sorted_tokens(s2))
}

/// Split into token sets, and compare sorted-intersection against
/// intersection-plus-each-side's-leftover, taking the best of three
/// comparisons (the `fuzzywuzzy`/`rapidfuzz` token-set-ratio construction).
fn token_set_components(s1: &str, s2: &str) -> (String, String, String) {
    use std::collections::BTreeSet;
    let t1: BTreeSet<&str> = s1.split_whitespace().collect();
    let t2: BTreeSet<&str> = s2.split_whitespace().collect();
    let intersection: Vec<&str> = t1.intersection(&t2).copied().collect();
    let only1: Vec<&str> = t1.difference(&t2).copied().collect();
    let only2: Vec<&str> = t2.difference(&t1).copied().collect();

    let sorted_join = |mut v: Vec<&str>| {
        v.sort_unstable();
        v.join(" ")
    };

    let inter_str = sorted_join(intersection.clone());
    let combined1 = sorted_join(intersection.iter().chain(only1.iter()).copied().collect());
    let combined2 = sorted_join(intersection.iter().chain(only2.iter()).copied().collect());
    (inter_str, combined1, combined2)
}

fn token_set_ratio(s1: &str, s2: &str) -> f64 {
    let (inter, combined1, combined2) = token_set_components(s1, s2);
    ratio(&inter, &combined1)
        .max(ratio(&inter, &combined2))
        .max(ratio(&combined1, &combined2))
}

fn partial_token_set_ratio(s1: &str, s2: &str) -> f64 {
    let (inter, combined1, combined2) = token_set_components(s1, s2);
    partial_ratio(&inter, &combined1)
        .max(partial_ratio(&inter, &combined2))
        .max(partial_ratio(&combined1, &combined2))
}

/// Score a query against a candidate's name plus up to ten normalized
/// aliases, returning the maximum (spec.md §4.5). `targets` must already be
/// match-normalized by the caller.
pub fn best_score<'a>(query_norm: &str, targets: impl IntoIterator<Item = &'a str>) -> f64 {
    targets
        .into_iter()
        .filter(|t| !t.is_empty())
        .map(|t| wratio(query_norm, t))
        .fold(0.0_f64, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_100() {
        assert_eq!(wratio("platinum", "platinum"), 100.0);
    }

    #[test]
    fn empty_input_scores_zero() {
        assert_eq!(wratio("", "platinum"), 0.0);
        assert_eq!(wratio("platinum", ""), 0.0);
    }

    #[test]
    fn completely_different_strings_score_low() {
        assert!(wratio("platinum", "zzzzzzzz") < 40.0);
    }

    #[test]
    fn token_reordering_scores_high() {
        // token_sort_ratio should dominate here since lengths are close.
        assert!(wratio("acme mining corp", "corp acme mining") > 95.0);
    }

    #[test]
    fn substring_of_longer_string_scores_well_via_partial() {
        let score = wratio("acme", "the acme mining and smelting company");
        assert!(score >= 60.0, "expected partial-ratio boost, got {score}");
    }

    #[test]
    fn best_score_picks_alias_over_name() {
        let score = best_score("pt", ["platinum", "pt", "plat"]);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn scores_are_bounded() {
        for (a, b) in [("foo", "bar"), ("company a", "company a inc"), ("x", "")] {
            let s = wratio(a, b);
            assert!((0.0..=100.0).contains(&s));
        }
    }
}
