//! Admin1 region (state/province) resolution (spec.md [PLACES]).
//!
//! Grounded on `places/placeapi.py`, `places/placenormalize.py`. Places use
//! the generic blocking/resolver building blocks from `entityidentity-core`
//! directly, with one twist: a `country_hint` that isn't already an ISO2
//! code is re-resolved through `entityidentity-countries` before blocking
//! (`blocking::resolve_country_hint`).

pub mod blocking;
pub mod normalize;
pub mod resolver;
pub mod types;

pub use resolver::{list_places, match_place, resolve_place, PlaceMatch, ResolveResult};
pub use types::{build_records, PlaceRecord};

use std::path::Path;

use entityidentity_config::Domain;
use entityidentity_snapshot::SnapshotError;

/// Load and materialize the places snapshot into [`PlaceRecord`]s, caching
/// the underlying [`entityidentity_snapshot::Snapshot`] per the process-wide
/// policy (spec.md §5).
pub fn load_places(explicit: Option<&str>, crate_dir: &Path) -> Result<Vec<PlaceRecord>, SnapshotError> {
    let snapshot = entityidentity_snapshot::get_or_load(Domain::Places, explicit, crate_dir)?;
    Ok(build_records(&snapshot))
}
