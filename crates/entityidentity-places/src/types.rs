//! Owned place (admin1 region) record, materialized from a [`Snapshot`] row.

use std::collections::BTreeMap;

use entityidentity_core::record::{insert_aliases, ToMap};
use entityidentity_snapshot::Snapshot;

#[derive(Debug, Clone)]
pub struct PlaceRecord {
    pub place_id: String,
    pub country: String,
    pub admin1: String,
    pub admin1_norm: String,
    pub admin1_code: String,
    pub aliases: Vec<String>,
    pub aliases_norm: Vec<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
    pub geonameid: Option<String>,
}

pub fn build_records(snapshot: &Snapshot) -> Vec<PlaceRecord> {
    snapshot
        .rows()
        .iter()
        .map(|row| {
            let admin1 = snapshot.get(row, "admin1").unwrap_or("").to_string();
            let country = snapshot.get(row, "country").unwrap_or("").to_uppercase();
            let admin1_code = snapshot.get(row, "admin1_code").unwrap_or("").to_string();
            let admin1_norm = snapshot
                .get(row, "admin1_norm")
                .map(str::to_string)
                .unwrap_or_else(|| crate::normalize::normalize_place_name(&admin1));
            let aliases: Vec<String> = snapshot.aliases(row, 10).into_iter().map(str::to_string).collect();
            let aliases_norm = aliases.iter().map(|a| crate::normalize::normalize_place_name(a)).collect();
            let place_id = snapshot
                .get(row, "place_id")
                .map(str::to_string)
                .unwrap_or_else(|| entityidentity_core::id::place_id(&country, &admin1_code));
            PlaceRecord {
                place_id,
                country,
                admin1,
                admin1_norm,
                admin1_code,
                aliases,
                aliases_norm,
                lat: snapshot.get(row, "lat").and_then(|s| s.parse().ok()),
                lon: snapshot.get(row, "lon").and_then(|s| s.parse().ok()),
                geonameid: snapshot.get(row, "geonameid").map(str::to_string).filter(|s| !s.is_empty()),
            }
        })
        .collect()
}

impl ToMap for PlaceRecord {
    fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("place_id".to_string(), self.place_id.clone());
        map.insert("country".to_string(), self.country.clone());
        map.insert("admin1".to_string(), self.admin1.clone());
        map.insert("admin1_norm".to_string(), self.admin1_norm.clone());
        map.insert("admin1_code".to_string(), self.admin1_code.clone());
        map.insert("lat".to_string(), self.lat.map(|v| v.to_string()).unwrap_or_default());
        map.insert("lon".to_string(), self.lon.map(|v| v.to_string()).unwrap_or_default());
        map.insert("geonameid".to_string(), self.geonameid.clone().unwrap_or_default());
        insert_aliases(&mut map, &self.aliases, 10);
        map
    }
}
