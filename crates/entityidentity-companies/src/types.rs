//! Owned company record, materialized once from a [`Snapshot`] row so
//! blocking/scoring work over plain Rust values instead of re-deriving
//! normalized fields on every lookup.

use std::collections::BTreeMap;

use entityidentity_core::record::{insert_aliases, ToMap};
use entityidentity_snapshot::Snapshot;

#[derive(Debug, Clone)]
pub struct CompanyRecord {
    pub name: String,
    pub name_norm: String,
    pub country: String,
    pub lei: Option<String>,
    pub aliases: Vec<String>,
    pub aliases_norm: Vec<String>,
}

pub fn build_records(snapshot: &Snapshot) -> Vec<CompanyRecord> {
    snapshot
        .rows()
        .iter()
        .map(|row| {
            let name = snapshot.get(row, "name").unwrap_or("").to_string();
            let name_norm = snapshot
                .get(row, "name_norm")
                .map(str::to_string)
                .unwrap_or_else(|| crate::normalize::normalize_company_name(&name));
            let country = snapshot.get(row, "country").unwrap_or("").to_uppercase();
            let lei = snapshot
                .get(row, "lei")
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string);
            let aliases: Vec<String> = snapshot.aliases(row, 5).into_iter().map(str::to_string).collect();
            let aliases_norm = aliases
                .iter()
                .map(|a| crate::normalize::normalize_company_name(a))
                .collect();
            CompanyRecord {
                name,
                name_norm,
                country,
                lei,
                aliases,
                aliases_norm,
            }
        })
        .collect()
}

impl ToMap for CompanyRecord {
    fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("name".to_string(), self.name.clone());
        map.insert("name_norm".to_string(), self.name_norm.clone());
        map.insert("country".to_string(), self.country.clone());
        map.insert("lei".to_string(), self.lei.clone().unwrap_or_default());
        insert_aliases(&mut map, &self.aliases, 5);
        map
    }
}
