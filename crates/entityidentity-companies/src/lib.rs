//! Company name resolution (spec.md [COMPANIES]).
//!
//! Grounded on `companies/companyresolver.py`, `companyblocking.py`,
//! `companyscoring.py`, `companynormalize.py`, `companyapi.py` and
//! `companyextractor.py`. Companies are the one domain whose identifier is
//! not a SHA-1 hash: `"{name}:{country}"` is unique within this dataset and
//! human-readable, so [`api::get_company_id`] formats it directly.

pub mod api;
pub mod blocking;
pub mod extractor;
pub mod normalize;
pub mod resolver;
pub mod scoring;
pub mod types;

pub use resolver::{match_company, resolve_company, CompanyMatch, ResolveResult};
pub use types::{build_records, CompanyRecord};

use std::path::Path;

use entityidentity_config::Domain;
use entityidentity_snapshot::SnapshotError;

/// Load and materialize the companies snapshot into [`CompanyRecord`]s,
/// caching the underlying [`entityidentity_snapshot::Snapshot`] per the
/// process-wide policy (spec.md §5).
pub fn load_companies(explicit: Option<&str>, crate_dir: &Path) -> Result<Vec<CompanyRecord>, SnapshotError> {
    let snapshot = entityidentity_snapshot::get_or_load(Domain::Companies, explicit, crate_dir)?;
    Ok(build_records(&snapshot))
}
