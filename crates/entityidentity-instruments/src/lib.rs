//! Price instrument/ticker resolution (spec.md [INSTRUMENTS]).
//!
//! Grounded on `instruments/instrumentidentity.py`, `instruments/instrumentapi.py`:
//! a 4-step blocking cascade (ticker-pattern source detection, explicit
//! source hint, ticker exact/prefix, name-prefix fallback) feeding the
//! shared WRatio scorer with a source boost and a material-crosswalk boost.
//! Metal crosswalk (`material_id`/`cluster_id`) is best-effort: an instrument
//! with no crosswalk resolves fine, just without those fields populated.

pub mod blocking;
pub mod normalize;
pub mod resolver;
pub mod scoring;
pub mod types;

pub use resolver::{list_instruments, match_instruments, resolve_instrument, InstrumentMatch};
pub use types::{build_records, InstrumentRecord};

use std::path::Path;

use entityidentity_config::Domain;
use entityidentity_metals::MetalRecord;
use entityidentity_snapshot::SnapshotError;

/// Load and materialize the instruments snapshot into [`InstrumentRecord`]s,
/// crosswalking against an already-loaded metals pool (spec.md §5: caching
/// is per-domain; the crosswalk itself is computed at load time, not cached
/// separately).
pub fn load_instruments(explicit: Option<&str>, crate_dir: &Path, metals: &[MetalRecord]) -> Result<Vec<InstrumentRecord>, SnapshotError> {
    let snapshot = entityidentity_snapshot::get_or_load(Domain::Instruments, explicit, crate_dir)?;
    Ok(build_records(&snapshot, metals))
}
