//! End-to-end: write a snapshot CSV to a tempdir, load it through the real
//! file-search path, and resolve against it.

use entityidentity_baskets::{load_baskets, resolve_basket};

#[test]
fn loads_and_resolves_from_csv_snapshot() {
    entityidentity_snapshot::clear_cache();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("baskets.csv");
    std::fs::write(
        &path,
        "name,component1,component2\nBattery Metals Basket,Co:60,Li:40\nFerrous Basket,Fe:100,\n",
    )
    .unwrap();

    let records = load_baskets(Some(path.to_str().unwrap()), dir.path()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].components.len(), 2);

    let m = resolve_basket("Battery Metals Basket", &records, 85.0).expect("expected a match");
    assert_eq!(m.record.name, "Battery Metals Basket");
}

#[test]
fn missing_file_surfaces_not_found_with_searched_paths() {
    entityidentity_snapshot::clear_cache();
    let dir = tempfile::tempdir().unwrap();
    let err = load_baskets(None, dir.path()).unwrap_err();
    assert!(matches!(err, entityidentity_snapshot::SnapshotError::NotFound { .. }));
}
