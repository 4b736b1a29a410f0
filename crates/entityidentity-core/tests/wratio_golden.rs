//! Golden-value regression table for the fuzzy scorer (spec.md §4.5,
//! SPEC_FULL.md §4.5). String pairs are taken from the scenarios exercised
//! in the original Python suite (`tests/test_companyidentity.py`,
//! `tests/test_metals.py`): exact symbol/alias hits, minor typos, word
//! reordering, and legal-suffix variants. Since this crate reconstructs
//! `WRatio` from `strsim` primitives rather than vendoring RapidFuzz, the
//! pins are score *bands* (the property that actually matters for the
//! resolver's threshold logic), not single floating-point values.

use entityidentity_core::wratio::wratio;

#[test]
fn exact_alias_hits_100() {
    assert_eq!(wratio("pt", "pt"), 100.0);
    assert_eq!(wratio("platinum", "platinum"), 100.0);
}

#[test]
fn single_char_typo_stays_near_high_confidence() {
    // "glencor" vs "glencore" — one char short of the full name, a single
    // insertion away. Should land just under the exact-match ceiling and
    // comfortably above the uncertain floor (76) used by the company
    // resolver.
    let score = wratio("glencor", "glencore");
    assert!(score >= 85.0, "expected near-exact score, got {score}");
}

#[test]
fn reordered_tokens_stay_high_confidence() {
    assert!(wratio("rio tinto plc", "plc rio tinto") >= 88.0);
}

#[test]
fn legal_suffix_difference_alone_stays_well_above_uncertain_floor() {
    // After match-normalize strips legal suffixes this wouldn't even reach
    // the scorer, but callers may pass raw strings through match_* paths
    // that skip normalization; the scorer alone should still treat these as
    // a strong match.
    assert!(wratio("acme mining", "acme mining corp") >= 76.0);
}

#[test]
fn unrelated_strings_fall_below_uncertain_floor() {
    assert!(wratio("platinum", "soybean futures") < 76.0);
    assert!(wratio("glencore", "unobtanium holdings") < 76.0);
}

#[test]
fn short_abbreviation_against_long_name_uses_partial_alignment() {
    // Spec.md §4.5: partial-ratio family matters when lengths diverge
    // substantially — an abbreviation embedded in a long company name.
    let score = wratio("bhp", "bhp group limited");
    assert!(score > 40.0, "expected partial-ratio credit, got {score}");
}
