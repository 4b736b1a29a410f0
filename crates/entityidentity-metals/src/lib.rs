//! Metal/commodity resolution (spec.md [METALS]).
//!
//! Grounded on `metals/metalidentity.py`, `metals/metalnormalize.py`,
//! `metals/metalapi.py`: a 5-step blocking cascade (exact symbol, category
//! bucket, name prefix, supply-chain cluster, "metal:form" hint) feeding the
//! shared WRatio scorer.

pub mod blocking;
pub mod normalize;
pub mod resolver;
pub mod scoring;
pub mod types;

pub use resolver::{list_metals, match_metal, resolve_metal, MetalMatch};
pub use types::{build_records, MetalRecord};

use std::path::Path;

use entityidentity_config::Domain;
use entityidentity_snapshot::SnapshotError;

/// Load and materialize the metals snapshot into [`MetalRecord`]s, caching
/// the underlying [`entityidentity_snapshot::Snapshot`] per the process-wide
/// policy (spec.md §5).
pub fn load_metals(explicit: Option<&str>, crate_dir: &Path) -> Result<Vec<MetalRecord>, SnapshotError> {
    let snapshot = entityidentity_snapshot::get_or_load(Domain::Metals, explicit, crate_dir)?;
    Ok(build_records(&snapshot))
}
