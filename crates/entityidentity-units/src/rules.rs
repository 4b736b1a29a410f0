//! Per-material canonical-unit rule table (`units/unitapi.py::get_canonical_unit`'s
//! alias table and `unitconfig.yaml`'s material entries).

#[derive(Debug, Clone, Copy)]
pub enum ConversionRule {
    /// FeCr-style: price per ton of alloy, divided by grade fraction to get
    /// price per ton of contained metal, then converted ton->lb.
    AlloyGrade { grade_key: &'static str, canonical_unit: &'static str, canonical_basis: &'static str },
    /// APT-style: price per ton of concentrate, multiplied by grade fraction
    /// to get price per ton of contained metal, then converted ton->mtu.
    ConcentrateGrade { grade_key: &'static str, canonical_unit: &'static str, canonical_basis: &'static str },
    /// Copper/Aluminum/Nickel: price per ton or kg, converted to price per
    /// lb of contained metal. No grade required.
    BaseMetal { canonical_unit: &'static str, canonical_basis: &'static str },
    /// Gold/Silver/Platinum/Palladium: quoted per troy ounce already; no
    /// conversion performed.
    PreciousMetal { canonical_unit: &'static str, canonical_basis: &'static str },
}

impl ConversionRule {
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            ConversionRule::AlloyGrade { canonical_unit, .. } => canonical_unit,
            ConversionRule::ConcentrateGrade { canonical_unit, .. } => canonical_unit,
            ConversionRule::BaseMetal { canonical_unit, .. } => canonical_unit,
            ConversionRule::PreciousMetal { canonical_unit, .. } => canonical_unit,
        }
    }

    pub fn canonical_basis(&self) -> &'static str {
        match self {
            ConversionRule::AlloyGrade { canonical_basis, .. } => canonical_basis,
            ConversionRule::ConcentrateGrade { canonical_basis, .. } => canonical_basis,
            ConversionRule::BaseMetal { canonical_basis, .. } => canonical_basis,
            ConversionRule::PreciousMetal { canonical_basis, .. } => canonical_basis,
        }
    }

    pub fn requires(&self) -> Vec<&'static str> {
        match self {
            ConversionRule::AlloyGrade { grade_key, .. } => vec![grade_key, "ton_system"],
            ConversionRule::ConcentrateGrade { grade_key, .. } => vec![grade_key],
            ConversionRule::BaseMetal { .. } => vec![],
            ConversionRule::PreciousMetal { .. } => vec![],
        }
    }
}

/// `get_canonical_unit`'s alias handling: map a free-text material hint to
/// one of the canonical material keys below.
pub fn resolve_material_key(material: &str) -> Option<&'static str> {
    match material.to_uppercase().as_str() {
        "FECR" | "FERROCHROME" => Some("FeCr"),
        "APT" | "AMMONIUM PARATUNGSTATE" => Some("APT"),
        "CU" | "COPPER" => Some("Copper"),
        "AL" | "ALUMINUM" | "ALUMINIUM" => Some("Aluminum"),
        "NI" | "NICKEL" => Some("Nickel"),
        "AU" | "GOLD" => Some("Gold"),
        "AG" | "SILVER" => Some("Silver"),
        "PT" | "PLATINUM" => Some("Platinum"),
        "PD" | "PALLADIUM" => Some("Palladium"),
        _ => None,
    }
}

pub fn conversion_rule(material_key: &str) -> Option<ConversionRule> {
    match material_key {
        "FeCr" => Some(ConversionRule::AlloyGrade { grade_key: "Cr_pct", canonical_unit: "USD/lb", canonical_basis: "Cr contained" }),
        "APT" => {
            Some(ConversionRule::ConcentrateGrade { grade_key: "WO3_pct", canonical_unit: "USD/mtu WO3", canonical_basis: "WO3 basis" })
        }
        "Copper" => Some(ConversionRule::BaseMetal { canonical_unit: "USD/lb", canonical_basis: "Cu contained" }),
        "Aluminum" => Some(ConversionRule::BaseMetal { canonical_unit: "USD/lb", canonical_basis: "Al contained" }),
        "Nickel" => Some(ConversionRule::BaseMetal { canonical_unit: "USD/lb", canonical_basis: "Ni contained" }),
        "Gold" => Some(ConversionRule::PreciousMetal { canonical_unit: "USD/oz", canonical_basis: "Gold contained" }),
        "Silver" => Some(ConversionRule::PreciousMetal { canonical_unit: "USD/oz", canonical_basis: "Silver contained" }),
        "Platinum" => Some(ConversionRule::PreciousMetal { canonical_unit: "USD/oz", canonical_basis: "Platinum contained" }),
        "Palladium" => Some(ConversionRule::PreciousMetal { canonical_unit: "USD/oz", canonical_basis: "Palladium contained" }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_common_aliases() {
        assert_eq!(resolve_material_key("FeCr"), Some("FeCr"));
        assert_eq!(resolve_material_key("ferrochrome"), Some("FeCr"));
        assert_eq!(resolve_material_key("Cu"), Some("Copper"));
        assert_eq!(resolve_material_key("Unobtanium"), None);
    }

    #[test]
    fn fecr_requires_grade_and_ton_system() {
        let rule = conversion_rule("FeCr").unwrap();
        assert_eq!(rule.requires(), vec!["Cr_pct", "ton_system"]);
    }

    #[test]
    fn copper_requires_nothing() {
        let rule = conversion_rule("Copper").unwrap();
        assert!(rule.requires().is_empty());
    }
}
