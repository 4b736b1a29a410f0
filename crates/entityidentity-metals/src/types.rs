//! Owned metal/commodity record, materialized from a [`Snapshot`] row.

use std::collections::BTreeMap;

use entityidentity_core::record::{insert_aliases, ToMap};
use entityidentity_snapshot::Snapshot;

#[derive(Debug, Clone)]
pub struct MetalRecord {
    pub metal_id: String,
    pub metal_key: String,
    pub symbol: Option<String>,
    pub name: String,
    pub name_norm: String,
    pub formula: Option<String>,
    pub code: Option<String>,
    pub category_bucket: Option<String>,
    pub cluster_id: Option<String>,
    pub default_unit: Option<String>,
    pub default_basis: Option<String>,
    pub aliases: Vec<String>,
    pub aliases_norm: Vec<String>,
}

fn opt(snapshot: &Snapshot, row: &[String], column: &str) -> Option<String> {
    snapshot.get(row, column).map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

pub fn build_records(snapshot: &Snapshot) -> Vec<MetalRecord> {
    snapshot
        .rows()
        .iter()
        .map(|row| {
            let name = snapshot.get(row, "name").unwrap_or("").to_string();
            let name_norm = snapshot
                .get(row, "name_norm")
                .map(str::to_string)
                .unwrap_or_else(|| crate::normalize::normalize_metal_name(&name));
            let aliases: Vec<String> = snapshot.aliases(row, 10).into_iter().map(str::to_string).collect();
            let aliases_norm = aliases.iter().map(|a| crate::normalize::normalize_metal_name(a)).collect();
            let metal_id = snapshot
                .get(row, "metal_id")
                .map(str::to_string)
                .unwrap_or_else(|| entityidentity_core::id::metal_id(&name_norm));
            let metal_key = snapshot
                .get(row, "metal_key")
                .map(str::to_string)
                .unwrap_or_else(|| crate::normalize::slugify_metal_name(&name));
            MetalRecord {
                metal_id,
                metal_key,
                symbol: opt(snapshot, row, "symbol"),
                name,
                name_norm,
                formula: opt(snapshot, row, "formula"),
                code: opt(snapshot, row, "code"),
                category_bucket: opt(snapshot, row, "category_bucket"),
                cluster_id: opt(snapshot, row, "cluster_id"),
                default_unit: opt(snapshot, row, "default_unit"),
                default_basis: opt(snapshot, row, "default_basis"),
                aliases,
                aliases_norm,
            }
        })
        .collect()
}

impl ToMap for MetalRecord {
    fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("metal_id".to_string(), self.metal_id.clone());
        map.insert("metal_key".to_string(), self.metal_key.clone());
        map.insert("symbol".to_string(), self.symbol.clone().unwrap_or_default());
        map.insert("name".to_string(), self.name.clone());
        map.insert("name_norm".to_string(), self.name_norm.clone());
        map.insert("formula".to_string(), self.formula.clone().unwrap_or_default());
        map.insert("code".to_string(), self.code.clone().unwrap_or_default());
        map.insert("category_bucket".to_string(), self.category_bucket.clone().unwrap_or_default());
        map.insert("cluster_id".to_string(), self.cluster_id.clone().unwrap_or_default());
        map.insert("default_unit".to_string(), self.default_unit.clone().unwrap_or_default());
        map.insert("default_basis".to_string(), self.default_basis.clone().unwrap_or_default());
        insert_aliases(&mut map, &self.aliases, 10);
        map
    }
}
