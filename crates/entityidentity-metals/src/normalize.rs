//! Metal-specific wrappers over the shared normalizer
//! (`metals/metalnormalize.py`).

use entityidentity_core::normalize::{allow_sets, canonicalize_name, normalize_name, slugify_name};

pub fn normalize_metal_name(s: &str) -> String {
    normalize_name(s, false, allow_sets::metals)
}

pub fn canonicalize_metal_name(s: &str) -> String {
    canonicalize_name(s, false, true, allow_sets::metals_display)
}

pub fn slugify_metal_name(s: &str) -> String {
    slugify_name(s)
}

/// Split a `"metal:form"` query into its metal part and an optional form
/// hint (`metalidentity.py::_parse_metal_form_hint`).
pub fn parse_metal_form_hint(query: &str) -> (String, Option<String>) {
    match query.split_once(':') {
        None => (query.to_string(), None),
        Some((metal, form)) => (metal.trim().to_string(), Some(form.trim().to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_percent_and_slash() {
        assert_eq!(normalize_metal_name("APT 88.5%"), "apt 88.5%");
        assert_eq!(normalize_metal_name("Pt/Pd"), "pt/pd");
    }

    #[test]
    fn canonicalize_title_cases() {
        assert_eq!(canonicalize_metal_name("lithium carbonate"), "Lithium Carbonate");
    }

    #[test]
    fn slugify_strips_parens() {
        assert_eq!(slugify_metal_name("Ammonium paratungstate (APT)"), "ammonium-paratungstate-apt");
    }

    #[test]
    fn form_hint_is_parsed() {
        assert_eq!(
            parse_metal_form_hint("lithium:carbonate"),
            ("lithium".to_string(), Some("carbonate".to_string()))
        );
        assert_eq!(parse_metal_form_hint("platinum"), ("platinum".to_string(), None));
    }
}
