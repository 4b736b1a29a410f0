//! Commodity basket resolution (spec.md [BASKETS]).
//!
//! Grounded on `baskets/basketidentity.py`, `baskets/basketnormalize.py`,
//! `baskets/basketapi.py`: a flat, unclustered namespace with a 2-step
//! blocking cascade (exact `basket_id`, then name prefix) feeding the shared
//! WRatio scorer. Unlike metals, baskets carry no category/cluster stage —
//! the namespace is small enough that prefix blocking alone is sufficient.

pub mod blocking;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use resolver::{basket_component_symbols, list_baskets, match_basket, resolve_basket, BasketMatch};
pub use types::{build_records, BasketRecord, Component};

use std::path::Path;

use entityidentity_config::Domain;
use entityidentity_snapshot::SnapshotError;

/// Load and materialize the baskets snapshot into [`BasketRecord`]s, caching
/// the underlying [`entityidentity_snapshot::Snapshot`] per the process-wide
/// policy (spec.md §5).
pub fn load_baskets(explicit: Option<&str>, crate_dir: &Path) -> Result<Vec<BasketRecord>, SnapshotError> {
    let snapshot = entityidentity_snapshot::get_or_load(Domain::Baskets, explicit, crate_dir)?;
    Ok(build_records(&snapshot))
}
