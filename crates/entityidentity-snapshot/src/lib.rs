//! Immutable, process-lifetime-cached columnar snapshot store (spec.md §4.3,
//! §5). Each domain's [`Snapshot`] is loaded once per process and shared
//! behind an `Arc`; [`clear_cache`] exists only so tests can force a reload
//! against a different fixture.

pub mod error;
pub mod loader;
pub mod snapshot;

pub use error::SnapshotError;
pub use snapshot::Snapshot;

use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use entityidentity_config::{Domain, EnvSource, ProcessEnv};
use once_cell::sync::Lazy;

/// Keyed by [`Domain`] so every domain gets its own slot; `RwLock` (rather
/// than a bare `OnceLock`) is deliberate so [`clear_cache`] can reset a slot
/// for tests without restarting the process (see DESIGN.md Open Questions).
static CACHE: Lazy<RwLock<HashMap<Domain, Arc<Snapshot>>>> = Lazy::new(|| RwLock::new(HashMap::new()));

/// Return the cached snapshot for `domain`, loading and caching it on first
/// use. `explicit` overrides the search (spec.md §4.3 stage 1); `crate_dir`
/// is the directory whose `data/` subtree is searched (pass each domain
/// crate's own `CARGO_MANIFEST_DIR`).
pub fn get_or_load(domain: Domain, explicit: Option<&str>, crate_dir: &Path) -> Result<Arc<Snapshot>, SnapshotError> {
    get_or_load_with_env(domain, explicit, &ProcessEnv, crate_dir)
}

/// [`get_or_load`] parameterized over an [`EnvSource`] for testability.
pub fn get_or_load_with_env<E: EnvSource>(
    domain: Domain,
    explicit: Option<&str>,
    env: &E,
    crate_dir: &Path,
) -> Result<Arc<Snapshot>, SnapshotError> {
    if let Some(hit) = CACHE.read().expect("snapshot cache poisoned").get(&domain) {
        return Ok(hit.clone());
    }

    let snapshot = loader::locate_and_load(domain, explicit, env, crate_dir)?;
    let snapshot = Arc::new(snapshot);
    CACHE
        .write()
        .expect("snapshot cache poisoned")
        .insert(domain, snapshot.clone());
    tracing::debug!(?domain, rows = snapshot.len(), "loaded snapshot");
    Ok(snapshot)
}

/// Drop every cached snapshot. Test-only: production code loads once and
/// keeps the result for the life of the process.
pub fn clear_cache() {
    CACHE.write().expect("snapshot cache poisoned").clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use entityidentity_config::MapEnvSource;

    #[test]
    fn caches_after_first_load() {
        clear_cache();
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("x.csv"), "name\nAcme\n").unwrap();
        let env = MapEnvSource::new();

        let a = get_or_load_with_env(Domain::Baskets, Some(dir.path().join("x.csv").to_str().unwrap()), &env, dir.path()).unwrap();
        // Remove the backing file; a cache hit must not need to re-read it.
        std::fs::remove_file(dir.path().join("x.csv")).unwrap();
        let b = get_or_load_with_env(Domain::Baskets, Some(dir.path().join("x.csv").to_str().unwrap()), &env, dir.path()).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
        clear_cache();
    }

    #[test]
    fn clear_cache_forces_reload() {
        clear_cache();
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.csv");
        std::fs::write(&file, "name\nAcme\n").unwrap();
        let env = MapEnvSource::new();

        let a = get_or_load_with_env(Domain::Metals, Some(file.to_str().unwrap()), &env, dir.path()).unwrap();
        clear_cache();
        std::fs::write(&file, "name\nAcme\nBeta\n").unwrap();
        let b = get_or_load_with_env(Domain::Metals, Some(file.to_str().unwrap()), &env, dir.path()).unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(b.len(), 2);
        clear_cache();
    }
}
