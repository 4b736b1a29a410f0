//! Top-level public surface (`companies/companyapi.py`): `company_identifier`,
//! `get_company_id`, and deprecated back-compat aliases.

use std::sync::Once;

use entityidentity_core::resolver::CompanyDecision;

use crate::resolver::resolve_company;
use crate::types::CompanyRecord;

/// `"{name}:{country}"`, or a filesystem-safe variant with every non-
/// alphanumeric character collapsed to `_` (`companyapi.py::get_company_id`).
pub fn get_company_id(name: &str, country: &str, safe: bool) -> String {
    if safe {
        let safe_name = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect::<String>();
        let safe_name = safe_name.trim_matches('_');
        format!("{safe_name}_{country}")
    } else {
        format!("{name}:{country}")
    }
}

/// Resolve `name` to `"name:country"`, or `None` if the resolver's decision
/// isn't [`CompanyDecision::AutoHighConf`] (spec.md §4.10: only a confident
/// match is worth a bare identifier string).
pub fn company_identifier(name: &str, records: &[CompanyRecord], country: Option<&str>) -> Option<String> {
    let result = resolve_company(name, records, country, 88.0, 6.0, 76.0);
    if result.decision != CompanyDecision::AutoHighConf {
        return None;
    }
    let best = result.best()?;
    Some(get_company_id(&best.record.name, &best.record.country, false))
}

/// Back-compat alias for [`company_identifier`] (`companyapi.py::get_identifier`).
pub fn get_identifier(name: &str, records: &[CompanyRecord], country: Option<&str>) -> Option<String> {
    deprecation_warning(&GET_IDENTIFIER_ONCE, "get_identifier", "company_identifier");
    company_identifier(name, records, country)
}

static GET_IDENTIFIER_ONCE: Once = Once::new();
static NORMALIZE_NAME_ONCE: Once = Once::new();

fn deprecation_warning(once: &Once, old: &str, new: &str) {
    once.call_once(|| {
        tracing::warn!(old_name = old, new_name = new, "deprecated alias called; switch to the replacement before v1.0.0");
    });
}

/// Back-compat alias for [`crate::normalize::normalize_company_name`].
#[deprecated(note = "use normalize_company_name instead")]
pub fn normalize_name(name: &str) -> String {
    deprecation_warning(&NORMALIZE_NAME_ONCE, "normalize_name", "normalize_company_name");
    crate::normalize::normalize_company_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_company_id_plain() {
        assert_eq!(get_company_id("Apple Inc", "US", false), "Apple Inc:US");
    }

    #[test]
    fn get_company_id_safe_collapses_punctuation() {
        assert_eq!(get_company_id("Apple, Inc.", "US", true), "Apple_Inc_US");
    }

    #[test]
    fn company_identifier_requires_high_confidence() {
        let records = vec![CompanyRecord {
            name: "Apple Inc".to_string(),
            name_norm: crate::normalize::normalize_company_name("Apple Inc"),
            country: "US".to_string(),
            lei: None,
            aliases: vec![],
            aliases_norm: vec![],
        }];
        assert_eq!(
            company_identifier("Apple Inc", &records, Some("US")),
            Some("Apple Inc:US".to_string())
        );
        assert_eq!(company_identifier("Totally Unrelated Co", &records, None), None);
    }
}
