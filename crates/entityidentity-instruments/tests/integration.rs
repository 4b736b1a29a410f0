//! End-to-end: write a snapshot CSV to a tempdir, load it through the real
//! file-search path, and resolve against it (including the metal crosswalk
//! fallback path, since the tempdir snapshot carries no `material_id` column).

use entityidentity_instruments::{load_instruments, resolve_instrument};
use entityidentity_metals::MetalRecord;

#[test]
fn loads_and_resolves_from_csv_snapshot_with_crosswalk_fallback() {
    entityidentity_snapshot::clear_cache();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("instruments.csv");
    std::fs::write(
        &path,
        "Source,asset_id,Name\nFastmarkets,MB-CO-0005,Cobalt standard grade\nLME,LME-AL-CASH,Aluminium cash\n",
    )
    .unwrap();

    let metals: Vec<MetalRecord> = entityidentity_metals::build_records(&entityidentity_snapshot::Snapshot::new(
        vec!["name".into()],
        vec![vec!["Cobalt".into()], vec!["Aluminium".into()]],
    ));

    let records = load_instruments(Some(path.to_str().unwrap()), dir.path(), &metals).unwrap();
    assert_eq!(records.len(), 2);
    assert!(records.iter().any(|r| r.material_key.as_deref() == Some("cobalt")));

    let m = resolve_instrument("MB-CO-0005", &records, None, Some("cobalt"), 85.0).expect("expected a match");
    assert_eq!(m.record.ticker, "MB-CO-0005");
}

#[test]
fn missing_file_surfaces_not_found_with_searched_paths() {
    entityidentity_snapshot::clear_cache();
    let dir = tempfile::tempdir().unwrap();
    let err = load_instruments(None, dir.path(), &[]).unwrap_err();
    assert!(matches!(err, entityidentity_snapshot::SnapshotError::NotFound { .. }));
}
