//! End-to-end: write a snapshot CSV to a tempdir, load it through the real
//! file-search path, and resolve against it.

use entityidentity_metals::{load_metals, resolve_metal};

#[test]
fn loads_and_resolves_from_csv_snapshot() {
    entityidentity_snapshot::clear_cache();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("metals.csv");
    std::fs::write(&path, "name,symbol,category_bucket\nCobalt,Co,battery\nAluminium,Al,base\n").unwrap();

    let records = load_metals(Some(path.to_str().unwrap()), dir.path()).unwrap();
    assert_eq!(records.len(), 2);

    let m = resolve_metal("cobalt", &records, None, None, 85.0).expect("expected a match");
    assert_eq!(m.record.name, "Cobalt");
}

#[test]
fn missing_file_surfaces_not_found_with_searched_paths() {
    entityidentity_snapshot::clear_cache();
    let dir = tempfile::tempdir().unwrap();
    let err = load_metals(None, dir.path()).unwrap_err();
    assert!(matches!(err, entityidentity_snapshot::SnapshotError::NotFound { .. }));
}
