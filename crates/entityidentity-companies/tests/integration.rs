//! End-to-end: write a snapshot CSV to a tempdir, load it through the real
//! file-search path, and resolve against it.

use entityidentity_companies::{load_companies, resolve_company};

#[test]
fn loads_and_resolves_from_csv_snapshot() {
    entityidentity_snapshot::clear_cache();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("companies.csv");
    std::fs::write(
        &path,
        "name,country,lei\nAcme Mining Pty Ltd,AU,\nBeta Resources Inc,US,549300ABCDEF1234XYZZ\n",
    )
    .unwrap();

    let records = load_companies(Some(path.to_str().unwrap()), dir.path()).unwrap();
    assert_eq!(records.len(), 2);

    let result = resolve_company("Acme Mining", &records, Some("AU"), 88.0, 6.0, 76.0);
    let best = result.best().expect("expected a match");
    assert_eq!(best.record.name, "Acme Mining Pty Ltd");

    let country_mismatch = resolve_company("Acme Mining", &records, Some("ZZ"), 88.0, 6.0, 76.0);
    assert!(country_mismatch.best().is_none() || country_mismatch.best().unwrap().record.name != "Acme Mining Pty Ltd");
    entityidentity_snapshot::clear_cache();
}

#[test]
fn missing_file_surfaces_not_found_with_searched_paths() {
    entityidentity_snapshot::clear_cache();
    let dir = tempfile::tempdir().unwrap();
    let err = load_companies(None, dir.path()).unwrap_err();
    assert!(matches!(err, entityidentity_snapshot::SnapshotError::NotFound { .. }));
}
