//! Essence: resolve free-text references to canonical entities with stable,
//! deterministic identifiers. Accident: snapshot storage, CLI plumbing,
//! environment configuration — kept in their own crates.
//!
//! This crate is a thin facade that re-exports the per-domain resolver
//! crates under one namespace, mirroring how `otlp2parquet`'s root crate
//! re-exports `otlp2parquet-core`/`otlp2parquet-batch`/`otlp2parquet-server`.

pub use entityidentity_baskets as baskets;
pub use entityidentity_companies as companies;
pub use entityidentity_config as config;
pub use entityidentity_core as core;
pub use entityidentity_countries as countries;
pub use entityidentity_instruments as instruments;
pub use entityidentity_metals as metals;
pub use entityidentity_period as period;
pub use entityidentity_places as places;
pub use entityidentity_snapshot as snapshot;
pub use entityidentity_units as units;
