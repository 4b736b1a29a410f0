//! Owned instrument record, materialized from a [`Snapshot`] row
//! (`instruments/instrumentloaders.py::load_instruments`).

use std::collections::BTreeMap;

use entityidentity_core::record::{insert_aliases, ToMap};
use entityidentity_metals::MetalRecord;
use entityidentity_snapshot::Snapshot;

#[derive(Debug, Clone)]
pub struct InstrumentRecord {
    pub instrument_id: String,
    pub provider: String,
    pub provider_norm: String,
    pub ticker: String,
    pub ticker_norm: String,
    pub instrument_name: Option<String>,
    pub name_norm: String,
    pub currency: Option<String>,
    pub unit: Option<String>,
    pub basis: Option<String>,
    pub material_id: Option<String>,
    /// The crosswalked metal's `name_norm`, used for hint matching
    /// (`material_id` is a content hash and can never equal a normalized
    /// hint string; this is the resolvable counterpart).
    pub material_key: Option<String>,
    pub cluster_id: Option<String>,
    pub aliases: Vec<String>,
    pub aliases_norm: Vec<String>,
}

fn opt(snapshot: &Snapshot, row: &[String], column: &str) -> Option<String> {
    snapshot.get(row, column).map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

/// `instruments/instrumentapi.py`'s candidate name columns, first non-empty
/// wins (`"Name"`, `"name"`, `"instrument_name"`, `"asset_name"`, `"Description"`).
const NAME_COLUMNS: &[&str] = &["Name", "name", "instrument_name", "asset_name", "Description"];

/// Best-effort metal crosswalk (spec.md §3: "Crosswalk is best-effort;
/// missing crosswalk is not an error"). If the snapshot already carries a
/// `material_id` column, that wins; otherwise we try resolving the
/// instrument's display name against the loaded metals pool and inherit its
/// `cluster_id`.
fn crosswalk_material<'a>(instrument_name: &str, metals: &'a [MetalRecord]) -> Option<&'a MetalRecord> {
    if instrument_name.trim().is_empty() {
        return None;
    }
    entityidentity_metals::resolve_metal(instrument_name, metals, None, None, 85.0).map(|m| m.record)
}

pub fn build_records(snapshot: &Snapshot, metals: &[MetalRecord]) -> Vec<InstrumentRecord> {
    snapshot
        .rows()
        .iter()
        .map(|row| {
            let provider = snapshot.get(row, "Source").or_else(|| snapshot.get(row, "provider")).unwrap_or("").to_string();
            let ticker = snapshot.get(row, "asset_id").or_else(|| snapshot.get(row, "ticker")).unwrap_or("").to_string();
            let provider_norm = crate::normalize::normalize_ticker(&provider);
            let ticker_norm = snapshot
                .get(row, "ticker_norm")
                .map(str::to_string)
                .unwrap_or_else(|| crate::normalize::normalize_ticker(&ticker));
            let instrument_name = NAME_COLUMNS.iter().find_map(|c| opt(snapshot, row, c));
            let name_norm = snapshot
                .get(row, "name_norm")
                .map(str::to_string)
                .unwrap_or_else(|| crate::normalize::normalize_instrument_name(instrument_name.as_deref().unwrap_or("")));
            let aliases: Vec<String> = snapshot.aliases(row, 10).into_iter().map(str::to_string).collect();
            let aliases_norm = aliases.iter().map(|a| crate::normalize::normalize_instrument_name(a)).collect();
            let instrument_id = snapshot
                .get(row, "instrument_id")
                .map(str::to_string)
                .unwrap_or_else(|| entityidentity_core::id::instrument_id(&provider_norm, &ticker_norm));

            let snapshot_material_id = opt(snapshot, row, "material_id");
            let snapshot_cluster_id = opt(snapshot, row, "cluster_id");
            let snapshot_material_key = opt(snapshot, row, "material_key").or_else(|| opt(snapshot, row, "material_norm"));
            let (material_id, material_key, cluster_id) = if snapshot_material_id.is_some() {
                (snapshot_material_id, snapshot_material_key, snapshot_cluster_id)
            } else {
                match crosswalk_material(instrument_name.as_deref().unwrap_or(""), metals) {
                    Some(metal) => (Some(metal.metal_id.clone()), Some(metal.name_norm.clone()), metal.cluster_id.clone()),
                    None => (None, None, None),
                }
            };

            InstrumentRecord {
                instrument_id,
                provider,
                provider_norm,
                ticker,
                ticker_norm,
                instrument_name,
                name_norm,
                currency: opt(snapshot, row, "currency"),
                unit: opt(snapshot, row, "unit"),
                basis: opt(snapshot, row, "basis"),
                material_id,
                material_key,
                cluster_id,
                aliases,
                aliases_norm,
            }
        })
        .collect()
}

impl ToMap for InstrumentRecord {
    fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("instrument_id".to_string(), self.instrument_id.clone());
        map.insert("provider".to_string(), self.provider.clone());
        map.insert("provider_norm".to_string(), self.provider_norm.clone());
        map.insert("ticker".to_string(), self.ticker.clone());
        map.insert("ticker_norm".to_string(), self.ticker_norm.clone());
        map.insert("instrument_name".to_string(), self.instrument_name.clone().unwrap_or_default());
        map.insert("name_norm".to_string(), self.name_norm.clone());
        map.insert("currency".to_string(), self.currency.clone().unwrap_or_default());
        map.insert("unit".to_string(), self.unit.clone().unwrap_or_default());
        map.insert("basis".to_string(), self.basis.clone().unwrap_or_default());
        map.insert("material_id".to_string(), self.material_id.clone().unwrap_or_default());
        map.insert("material_key".to_string(), self.material_key.clone().unwrap_or_default());
        map.insert("cluster_id".to_string(), self.cluster_id.clone().unwrap_or_default());
        insert_aliases(&mut map, &self.aliases, 10);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_record_from_minimal_row() {
        let snapshot = Snapshot::new(
            vec!["Source".into(), "asset_id".into(), "Name".into()],
            vec![vec!["Fastmarkets".into(), "MB-CO-0005".into(), "Cobalt standard grade".into()]],
        );
        let records = build_records(&snapshot, &[]);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].provider, "Fastmarkets");
        assert_eq!(records[0].ticker_norm, "mb-co-0005");
        assert_eq!(records[0].instrument_id.len(), 16);
    }
}
