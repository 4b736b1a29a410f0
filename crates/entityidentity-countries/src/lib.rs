//! Country resolution to canonical ISO 3166-1 codes (spec.md [COUNTRIES],
//! SPEC_FULL.md §4.7).
//!
//! Grounded on `countries/fuzzycountry.py`: a four-stage cascade — an
//! external alias converter (native-language endonyms and popular
//! variants), ISO code/name/official-name lookup, a manual
//! colloquial-alias catalog, then a fuzzy fallback — rather than the
//! generic blocking/resolver pipeline the other domains share, because the
//! candidate pool here is a small closed vendored table instead of a
//! snapshot file.

mod aliases;
mod converter;
mod iso_table;

pub use iso_table::{IsoEntry, ISO_TABLE};

use entityidentity_core::normalize::normalize_name;
use entityidentity_core::wratio::best_score;

fn country_chars(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' '
}

/// Output code system for [`country_identifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeSystem {
    Iso2,
    Iso3,
    Numeric,
}

/// Resolve a country name, code, or colloquialism to a canonical code.
///
/// `allow_user_assigned` controls whether the Kosovo (`XK`) user-assigned
/// code can be returned. When `false`, a match that would resolve to `XK` is
/// *not* immediately rejected — resolution falls through to the next stage
/// of the cascade instead, mirroring the Python original (see DESIGN.md Open
/// Questions: an input that is unambiguously Kosovo under an earlier, more
/// confident stage gracefully degrades to "not found" only if every later
/// stage also fails, rather than a same-stage failure immediately returning
/// `None`).
pub fn country_identifier(query: &str, to: CodeSystem, allow_user_assigned: bool) -> Option<String> {
    country_identifier_fuzzy(query, to, allow_user_assigned, true, 85.0)
}

/// Full form of [`country_identifier`] with fuzzy-fallback controls exposed.
pub fn country_identifier_fuzzy(
    query: &str,
    to: CodeSystem,
    allow_user_assigned: bool,
    fuzzy: bool,
    fuzzy_threshold: f64,
) -> Option<String> {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return None;
    }
    let query_norm = normalize_name(trimmed, false, country_chars);

    if let Some(alpha2) = converter_lookup(&query_norm) {
        if allow_user_assigned || alpha2 != "XK" {
            if let Some(entry) = ISO_TABLE.iter().find(|e| e.alpha2 == alpha2) {
                return Some(convert(entry, to));
            }
        }
    }

    if let Some(entry) = direct_code_lookup(trimmed) {
        if allow_user_assigned || entry.alpha2 != "XK" {
            return Some(convert(entry, to));
        }
    }

    if let Some(entry) = name_lookup(&query_norm) {
        if allow_user_assigned || entry.alpha2 != "XK" {
            return Some(convert(entry, to));
        }
    }

    if let Some(alpha2) = alias_lookup(&query_norm) {
        if allow_user_assigned || alpha2 != "XK" {
            if let Some(entry) = ISO_TABLE.iter().find(|e| e.alpha2 == alpha2) {
                return Some(convert(entry, to));
            }
        }
    }

    if fuzzy {
        if let Some(entry) = fuzzy_lookup(&query_norm, fuzzy_threshold) {
            if allow_user_assigned || entry.alpha2 != "XK" {
                return Some(convert(entry, to));
            }
        }
    }

    None
}

/// Batch form of [`country_identifier`], always returning ISO2.
pub fn country_identifiers<'a>(names: impl IntoIterator<Item = &'a str>) -> Vec<Option<String>> {
    names
        .into_iter()
        .map(|n| country_identifier(n, CodeSystem::Iso2, true))
        .collect()
}

fn converter_lookup(query_norm: &str) -> Option<&'static str> {
    converter::CONVERTER_ALIASES
        .iter()
        .find(|(alias, _)| *alias == query_norm)
        .map(|(_, code)| *code)
}

fn direct_code_lookup(query: &str) -> Option<&'static IsoEntry> {
    let upper = query.to_uppercase();
    ISO_TABLE
        .iter()
        .find(|e| e.alpha2 == upper || e.alpha3 == upper || e.numeric == upper)
}

fn name_lookup(query_norm: &str) -> Option<&'static IsoEntry> {
    ISO_TABLE.iter().find(|e| {
        normalize_name(e.name, false, country_chars) == query_norm
            || normalize_name(e.official_name, false, country_chars) == query_norm
    })
}

fn alias_lookup(query_norm: &str) -> Option<&'static str> {
    aliases::MANUAL_ALIASES
        .iter()
        .find(|(alias, _)| *alias == query_norm)
        .map(|(_, code)| *code)
}

fn fuzzy_lookup(query_norm: &str, threshold: f64) -> Option<&'static IsoEntry> {
    let mut best: Option<(&'static IsoEntry, f64)> = None;
    for entry in ISO_TABLE {
        let name_norm = normalize_name(entry.name, false, country_chars);
        let official_norm = normalize_name(entry.official_name, false, country_chars);
        let score = best_score(query_norm, [name_norm.as_str(), official_norm.as_str()]);
        if best.map(|(_, s)| score > s).unwrap_or(true) {
            best = Some((entry, score));
        }
    }
    best.filter(|(_, score)| *score >= threshold).map(|(e, _)| e)
}

fn convert(entry: &'static IsoEntry, to: CodeSystem) -> String {
    match to {
        CodeSystem::Iso2 => entry.alpha2.to_string(),
        CodeSystem::Iso3 => entry.alpha3.to_string(),
        CodeSystem::Numeric => entry.numeric.to_string(),
    }
}

/// Look up a full [`IsoEntry`] by any code form, for callers (e.g. places)
/// that need the whole record rather than just one output code.
pub fn lookup_entry(code: &str) -> Option<&'static IsoEntry> {
    let upper = code.to_uppercase();
    ISO_TABLE
        .iter()
        .find(|e| e.alpha2 == upper || e.alpha3 == upper || e.numeric == upper)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_iso2_code() {
        assert_eq!(
            country_identifier("US", CodeSystem::Iso2, true).as_deref(),
            Some("US")
        );
    }

    #[test]
    fn canonical_name() {
        assert_eq!(
            country_identifier("United States", CodeSystem::Iso2, true).as_deref(),
            Some("US")
        );
    }

    #[test]
    fn colloquial_alias() {
        assert_eq!(
            country_identifier("England", CodeSystem::Iso2, true).as_deref(),
            Some("GB")
        );
        assert_eq!(
            country_identifier("Holland", CodeSystem::Iso2, true).as_deref(),
            Some("NL")
        );
        assert_eq!(
            country_identifier("America", CodeSystem::Iso2, true).as_deref(),
            Some("US")
        );
    }

    #[test]
    fn native_language_alias_converter() {
        assert_eq!(
            country_identifier("Deutschland", CodeSystem::Iso2, true).as_deref(),
            Some("DE")
        );
        assert_eq!(
            country_identifier("Nippon", CodeSystem::Iso2, true).as_deref(),
            Some("JP")
        );
    }

    #[test]
    fn typo_tolerant_fuzzy_fallback() {
        assert_eq!(
            country_identifier("Untied States", CodeSystem::Iso2, true).as_deref(),
            Some("US")
        );
    }

    #[test]
    fn unrecognized_name_returns_none() {
        assert_eq!(country_identifier("Narnia", CodeSystem::Iso2, true), None);
    }

    #[test]
    fn iso3_and_numeric_conversion() {
        assert_eq!(
            country_identifier("US", CodeSystem::Iso3, true).as_deref(),
            Some("USA")
        );
        assert_eq!(
            country_identifier("US", CodeSystem::Numeric, true).as_deref(),
            Some("840")
        );
    }

    #[test]
    fn kosovo_user_assigned_code() {
        assert_eq!(
            country_identifier("Kosovo", CodeSystem::Iso2, true).as_deref(),
            Some("XK")
        );
    }

    #[test]
    fn kosovo_suppressed_when_user_assigned_disallowed() {
        assert_eq!(country_identifier("Kosovo", CodeSystem::Iso2, false), None);
    }

    #[test]
    fn empty_query_returns_none() {
        assert_eq!(country_identifier("   ", CodeSystem::Iso2, true), None);
    }
}
