//! Environment-variable configuration (spec.md §6, SPEC_FULL.md §2).
//!
//! Grounded on `otlp2parquet-core::config::env_overrides`: an [`EnvSource`]
//! trait abstracts `std::env` so tests can inject a fake environment instead
//! of mutating process-global state, and a small set of typed getters parse
//! values with a descriptive error on malformed input.

use thiserror::Error;

/// Source of environment-variable lookups. The process environment is the
/// default implementation; tests use [`MapEnvSource`] instead.
pub trait EnvSource {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads from `std::env`.
pub struct ProcessEnv;

impl EnvSource for ProcessEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// A fixed map standing in for the environment, for tests.
#[derive(Default, Clone, Debug)]
pub struct MapEnvSource(std::collections::HashMap<String, String>);

impl MapEnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(key.into(), value.into());
        self
    }
}

impl EnvSource for MapEnvSource {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key).cloned()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse {key}: {source}")]
    InvalidValue {
        key: &'static str,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Every domain's snapshot-path override variable (spec.md §6). Instruments
/// and facilities keep the original Python package's variable names
/// (`GSMC_TICKERS_PATH`, `ENTITYIDENTITY_FACILITIES_PATH`); the CLI-default
/// variables `COMPANIES_DB_PATH`/`UNITS_DB_PATH` are kept as-is too.
/// SPEC_FULL.md §2 adds one `ENTITYIDENTITY_{DOMAIN}_PATH` variable per
/// remaining domain so every snapshot has an explicit override, not just the
/// two the distillation happened to name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Domain {
    Companies,
    Countries,
    Places,
    Metals,
    Baskets,
    Instruments,
    Periods,
    Units,
    Facilities,
}

impl Domain {
    /// Primary override variable, checked before the module-local/package/
    /// dev-tree search locations (spec.md §4.3 stage 2).
    pub fn env_var(self) -> &'static str {
        match self {
            Domain::Companies => "COMPANIES_DB_PATH",
            Domain::Countries => "ENTITYIDENTITY_COUNTRIES_PATH",
            Domain::Places => "ENTITYIDENTITY_PLACES_PATH",
            Domain::Metals => "ENTITYIDENTITY_METALS_PATH",
            Domain::Baskets => "ENTITYIDENTITY_BASKETS_PATH",
            Domain::Instruments => "GSMC_TICKERS_PATH",
            Domain::Periods => "ENTITYIDENTITY_PERIODS_PATH",
            Domain::Units => "UNITS_DB_PATH",
            Domain::Facilities => "ENTITYIDENTITY_FACILITIES_PATH",
        }
    }

    /// Fixed on-disk alias-column width (spec.md §3, §6): companies get 5
    /// aliases, every other snapshot-backed domain gets 10. Used by the
    /// snapshot loader to pad missing alias columns on first load.
    pub fn alias_width(self) -> usize {
        match self {
            Domain::Companies => 5,
            _ => 10,
        }
    }

    /// Subdirectory name under a package/dev-tree `data/`/`tables/` root
    /// (spec.md §4.3 stages 3-5).
    pub fn data_subdir(self) -> &'static str {
        match self {
            Domain::Companies => "companies",
            Domain::Countries => "countries",
            Domain::Places => "places",
            Domain::Metals => "metals",
            Domain::Baskets => "baskets",
            Domain::Instruments => "instruments",
            Domain::Periods => "periods",
            Domain::Units => "units",
            Domain::Facilities => "facilities",
        }
    }
}

/// Resolver tuning knobs overridable from the environment (SPEC_FULL.md
/// §2): company-decision thresholds, the default `match_*` threshold, and
/// the country-resolver fuzzy-fallback threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolverTuning {
    pub default_threshold: f64,
    pub high_conf_threshold: f64,
    pub high_conf_gap: f64,
    pub uncertain_threshold: f64,
    pub country_fuzzy_threshold: f64,
}

impl Default for ResolverTuning {
    fn default() -> Self {
        ResolverTuning {
            default_threshold: 90.0,
            high_conf_threshold: entityidentity_core::resolver::HIGH_CONF_THRESHOLD,
            high_conf_gap: entityidentity_core::resolver::HIGH_CONF_GAP,
            uncertain_threshold: entityidentity_core::resolver::UNCERTAIN_THRESHOLD,
            country_fuzzy_threshold: 85.0,
        }
    }
}

impl ResolverTuning {
    /// Apply `ENTITYIDENTITY_*_THRESHOLD` overrides, highest priority as in
    /// the teacher's `apply_env_overrides`.
    pub fn with_env_overrides<E: EnvSource>(mut self, env: &E) -> Result<Self, ConfigError> {
        if let Some(v) = get_env_f64(env, "ENTITYIDENTITY_DEFAULT_THRESHOLD")? {
            self.default_threshold = v;
        }
        if let Some(v) = get_env_f64(env, "ENTITYIDENTITY_HIGH_CONF_THRESHOLD")? {
            self.high_conf_threshold = v;
        }
        if let Some(v) = get_env_f64(env, "ENTITYIDENTITY_HIGH_CONF_GAP")? {
            self.high_conf_gap = v;
        }
        if let Some(v) = get_env_f64(env, "ENTITYIDENTITY_UNCERTAIN_THRESHOLD")? {
            self.uncertain_threshold = v;
        }
        if let Some(v) = get_env_f64(env, "ENTITYIDENTITY_COUNTRY_FUZZY_THRESHOLD")? {
            self.country_fuzzy_threshold = v;
        }
        Ok(self)
    }
}

fn get_env_f64<E: EnvSource>(env: &E, key: &'static str) -> Result<Option<f64>, ConfigError> {
    match env.get(key) {
        Some(val) => val
            .parse::<f64>()
            .map(Some)
            .map_err(|source| ConfigError::InvalidValue { key, source }),
        None => Ok(None),
    }
}

/// Explicit path argument, if the caller passed one, takes priority over
/// everything else (spec.md §4.3 stage 1). This helper composes that with
/// the environment override for convenience at call sites.
pub fn resolve_env_override<E: EnvSource>(domain: Domain, explicit: Option<&str>, env: &E) -> Option<String> {
    if let Some(p) = explicit {
        return Some(p.to_string());
    }
    env.get(domain.env_var())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_env() {
        let env = MapEnvSource::new().with("COMPANIES_DB_PATH", "/env/companies.parquet");
        let resolved = resolve_env_override(Domain::Companies, Some("/explicit.parquet"), &env);
        assert_eq!(resolved.as_deref(), Some("/explicit.parquet"));
    }

    #[test]
    fn env_var_used_when_no_explicit_path() {
        let env = MapEnvSource::new().with("GSMC_TICKERS_PATH", "/env/tickers.parquet");
        let resolved = resolve_env_override(Domain::Instruments, None, &env);
        assert_eq!(resolved.as_deref(), Some("/env/tickers.parquet"));
    }

    #[test]
    fn tuning_defaults_match_core_constants() {
        let tuning = ResolverTuning::default();
        assert_eq!(tuning.high_conf_threshold, 88.0);
        assert_eq!(tuning.high_conf_gap, 6.0);
        assert_eq!(tuning.uncertain_threshold, 76.0);
    }

    #[test]
    fn tuning_env_override_applies() {
        let env = MapEnvSource::new().with("ENTITYIDENTITY_DEFAULT_THRESHOLD", "95.0");
        let tuning = ResolverTuning::default().with_env_overrides(&env).unwrap();
        assert_eq!(tuning.default_threshold, 95.0);
    }

    #[test]
    fn tuning_env_override_rejects_garbage() {
        let env = MapEnvSource::new().with("ENTITYIDENTITY_DEFAULT_THRESHOLD", "not-a-number");
        let err = ResolverTuning::default().with_env_overrides(&env).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key: "ENTITYIDENTITY_DEFAULT_THRESHOLD", .. }));
    }
}
