//! Unit normalization orchestration (`units/unitapi.py::normalize_unit`,
//! `get_canonical_unit`, `validate_conversion_inputs`).
//!
//! "Convert only when complete": every required parameter must be present
//! and in range before any arithmetic runs. A missing or invalid parameter
//! short-circuits to `norm == raw` plus an explanatory warning (spec.md
//! §4.9 steps 2-3).

use crate::rules::{conversion_rule, resolve_material_key, ConversionRule};
use crate::types::{NormResult, TonSystem, UnitInput, UnitResult};

const MT_PER_MTU: f64 = 10.0;
const KG_PER_LB: f64 = 2.20462;

fn already_canonical(unit: &str, canonical_unit: &str) -> bool {
    unit.to_lowercase().trim().starts_with(&canonical_unit.to_lowercase())
}

fn missing_grade_warning(material: &str, grade_key: &str, canonical_unit: &str) -> String {
    let display_unit = canonical_unit.replacen("USD", "$", 1);
    format!("{material} conversion requires {grade_key} in grade. Cannot convert to canonical {display_unit} basis.")
}

fn missing_ton_system_warning(material: &str) -> String {
    format!("{material} conversion requires ton_system (metric/short/long). Cannot convert without knowing ton type.")
}

fn invalid_grade_warning(grade_key: &str, pct: f64) -> String {
    format!("Invalid {grade_key}: {pct}. Must be between 0 and 100.")
}

fn passthrough(raw: &UnitInput, basis: Option<String>, warning: Option<String>) -> UnitResult {
    UnitResult { raw: raw.clone(), norm: NormResult { value: raw.value, unit: raw.unit.clone(), basis }, warning }
}

fn valid_grade_pct(pct: f64) -> bool {
    pct > 0.0 && pct <= 100.0
}

fn normalize_alloy_grade(raw: &UnitInput, material: &str, grade_key: &'static str, canonical_unit: &'static str, canonical_basis: &'static str) -> UnitResult {
    if already_canonical(&raw.unit, canonical_unit) {
        return passthrough(raw, Some(canonical_basis.to_string()), None);
    }

    let pct = match raw.grade.get(grade_key) {
        Some(pct) => *pct,
        None => return passthrough(raw, raw.basis.clone(), Some(missing_grade_warning(material, grade_key, canonical_unit))),
    };
    if !valid_grade_pct(pct) {
        return passthrough(raw, raw.basis.clone(), Some(invalid_grade_warning(grade_key, pct)));
    }
    let ton_system = match raw.ton_system {
        Some(ts) => ts,
        None => return passthrough(raw, raw.basis.clone(), Some(missing_ton_system_warning(material))),
    };

    let usd_per_ton_metal = raw.value / (pct / 100.0);
    let value = usd_per_ton_metal / ton_system.lb_per_ton();
    UnitResult { raw: raw.clone(), norm: NormResult { value, unit: canonical_unit.to_string(), basis: Some(canonical_basis.to_string()) }, warning: None }
}

fn normalize_concentrate_grade(raw: &UnitInput, material: &str, grade_key: &'static str, canonical_unit: &'static str, canonical_basis: &'static str) -> UnitResult {
    if already_canonical(&raw.unit, canonical_unit) {
        return passthrough(raw, Some(canonical_basis.to_string()), None);
    }

    let pct = match raw.grade.get(grade_key) {
        Some(pct) => *pct,
        None => return passthrough(raw, raw.basis.clone(), Some(missing_grade_warning(material, grade_key, canonical_unit))),
    };
    if !valid_grade_pct(pct) {
        return passthrough(raw, raw.basis.clone(), Some(invalid_grade_warning(grade_key, pct)));
    }

    let usd_per_ton_metal = raw.value * (pct / 100.0);
    let value = usd_per_ton_metal / MT_PER_MTU;
    UnitResult { raw: raw.clone(), norm: NormResult { value, unit: canonical_unit.to_string(), basis: Some(canonical_basis.to_string()) }, warning: None }
}

fn normalize_base_metal(raw: &UnitInput, canonical_unit: &'static str, canonical_basis: &'static str) -> UnitResult {
    if already_canonical(&raw.unit, canonical_unit) {
        return passthrough(raw, Some(canonical_basis.to_string()), None);
    }

    let unit_lower = raw.unit.to_lowercase();
    if unit_lower.contains("kg") {
        let value = raw.value / KG_PER_LB;
        return UnitResult { raw: raw.clone(), norm: NormResult { value, unit: canonical_unit.to_string(), basis: Some(canonical_basis.to_string()) }, warning: None };
    }
    if unit_lower.contains("/t") || unit_lower.ends_with(" t") || unit_lower == "usd/t" {
        return match raw.ton_system {
            Some(ts) => {
                let value = raw.value / ts.lb_per_ton();
                UnitResult { raw: raw.clone(), norm: NormResult { value, unit: canonical_unit.to_string(), basis: Some(canonical_basis.to_string()) }, warning: None }
            }
            None => {
                let value = raw.value / TonSystem::Metric.lb_per_ton();
                UnitResult {
                    raw: raw.clone(),
                    norm: NormResult { value, unit: canonical_unit.to_string(), basis: Some(canonical_basis.to_string()) },
                    warning: Some("Assumed metric ton for conversion. Specify ton_system explicitly if using short/long ton.".to_string()),
                }
            }
        };
    }

    passthrough(raw, raw.basis.clone().or(Some(canonical_basis.to_string())), None)
}

fn normalize_precious_metal(raw: &UnitInput, canonical_basis: &'static str) -> UnitResult {
    passthrough(raw, Some(canonical_basis.to_string()), None)
}

/// Normalize a raw price record to its material's canonical unit/basis
/// (spec.md §4.9). Unknown materials and unsupported unit shapes pass
/// through unchanged with an explanatory warning.
pub fn normalize_unit(raw: &UnitInput) -> UnitResult {
    let material = match raw.material.as_deref() {
        Some(m) => m,
        None => return passthrough(raw, raw.basis.clone(), None),
    };

    let material_key = match resolve_material_key(material) {
        Some(key) => key,
        None => return passthrough(raw, raw.basis.clone(), Some(format!("No conversion rule for material {material}"))),
    };

    match conversion_rule(material_key).expect("every resolved material key has a rule") {
        ConversionRule::AlloyGrade { grade_key, canonical_unit, canonical_basis } => {
            normalize_alloy_grade(raw, material_key, grade_key, canonical_unit, canonical_basis)
        }
        ConversionRule::ConcentrateGrade { grade_key, canonical_unit, canonical_basis } => {
            normalize_concentrate_grade(raw, material_key, grade_key, canonical_unit, canonical_basis)
        }
        ConversionRule::BaseMetal { canonical_unit, canonical_basis } => normalize_base_metal(raw, canonical_unit, canonical_basis),
        ConversionRule::PreciousMetal { canonical_basis, .. } => normalize_precious_metal(raw, canonical_basis),
    }
}

#[derive(Debug, Clone)]
pub struct CanonicalUnitInfo {
    pub canonical_unit: String,
    pub canonical_basis: String,
    pub requires: Vec<String>,
}

/// `get_canonical_unit`: canonical unit/basis/required-params for a material,
/// or `"Unknown"` fields for an unrecognized material.
pub fn get_canonical_unit(material: &str) -> CanonicalUnitInfo {
    match resolve_material_key(material).and_then(conversion_rule) {
        Some(rule) => CanonicalUnitInfo {
            canonical_unit: rule.canonical_unit().to_string(),
            canonical_basis: rule.canonical_basis().to_string(),
            requires: rule.requires().into_iter().map(str::to_string).collect(),
        },
        None => CanonicalUnitInfo { canonical_unit: "Unknown".to_string(), canonical_basis: "Unknown".to_string(), requires: vec![] },
    }
}

#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub valid: bool,
    pub missing: Vec<String>,
    pub message: String,
}

/// `validate_conversion_inputs`: check presence of every required parameter
/// without performing the conversion.
pub fn validate_conversion_inputs(material: &str, raw: &UnitInput) -> ValidationResult {
    let canonical = get_canonical_unit(material);
    if canonical.requires.is_empty() {
        return ValidationResult { valid: true, missing: vec![], message: "No special parameters required".to_string() };
    }

    let missing: Vec<String> = canonical
        .requires
        .iter()
        .filter(|param| {
            if param.as_str() == "ton_system" {
                raw.ton_system.is_none()
            } else {
                !raw.grade.contains_key(param.as_str())
            }
        })
        .cloned()
        .collect();

    if missing.is_empty() {
        ValidationResult { valid: true, missing, message: "All required parameters present".to_string() }
    } else {
        let message = format!("Missing required parameters: {}", missing.join(", "));
        ValidationResult { valid: false, missing, message }
    }
}
