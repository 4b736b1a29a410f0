//! Company-specific wrappers over the shared normalizer (spec.md [COMPANIES],
//! `companies/companynormalize.py`).

use entityidentity_core::normalize::{allow_sets, canonicalize_name, normalize_name};
use once_cell::sync::Lazy;
use regex::Regex;

/// Aggressive match-normalize: lowercase, ASCII-folded, legal suffix
/// stripped, `[a-z0-9&- ]` only.
pub fn normalize_company_name(s: &str) -> String {
    normalize_name(s, true, allow_sets::companies_match)
}

/// Light display-canonicalize: case preserved, legal-suffix punctuation
/// tidied (`"Acme, Inc."` -> `"Acme Inc"`), `[A-Za-z0-9&- ]` only.
pub fn canonicalize_company_name(s: &str) -> String {
    canonicalize_name(s, true, false, allow_sets::companies_display)
}

static VALID_CANONICAL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9&\-\s]*$").unwrap());

/// Whether `s` is already in canonical display form (companynormalize.py's
/// `validate_canonical_name`).
pub fn validate_canonical_name(s: &str) -> bool {
    VALID_CANONICAL_RE.is_match(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_legal_suffix_and_folds_case() {
        assert_eq!(normalize_company_name("Acme Mining, Inc."), "acme mining");
    }

    #[test]
    fn canonicalize_preserves_case_tidies_suffix() {
        assert_eq!(canonicalize_company_name("Acme Mining, Inc."), "Acme Mining Inc");
    }

    #[test]
    fn validate_rejects_disallowed_punctuation() {
        assert!(validate_canonical_name("Acme Mining Inc"));
        assert!(!validate_canonical_name("Acme Mining, Inc."));
    }
}
