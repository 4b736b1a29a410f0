//! Instrument-specific wrappers over the shared normalizer
//! (`instruments/instrumentidentity.py::normalize_ticker`,
//! `normalize_instrument_name`).

use entityidentity_core::normalize::{allow_sets, normalize_name};

pub fn normalize_ticker(s: &str) -> String {
    normalize_name(s, false, allow_sets::instrument_ticker)
}

pub fn normalize_instrument_name(s: &str) -> String {
    normalize_name(s, false, allow_sets::instrument_name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_keeps_hyphens_and_underscores() {
        assert_eq!(normalize_ticker("MB-CO-0005"), "mb-co-0005");
        assert_eq!(normalize_ticker("LME_AL_CASH"), "lme_al_cash");
    }

    #[test]
    fn name_keeps_percent_and_parens() {
        assert_eq!(normalize_instrument_name("APT 88.5% WO3 min"), "apt 88.5% wo3 min");
    }
}
