//! `serde_json::Value` rendering for domain records. None of the domain
//! crates derive `Serialize` themselves (spec.md keeps them free of any
//! particular wire format); every record instead implements
//! `entityidentity_core::record::ToMap` (SPEC_FULL.md §3's "common `to_map`
//! projection"), and this is the one place that turns that into JSON.

use std::collections::BTreeMap;

use serde_json::Value;

use entityidentity_baskets::BasketRecord;
use entityidentity_companies::CompanyRecord;
use entityidentity_core::record::ToMap;
use entityidentity_instruments::InstrumentRecord;
use entityidentity_metals::MetalRecord;
use entityidentity_period::Period;
use entityidentity_places::PlaceRecord;

fn map_to_value(map: &BTreeMap<String, String>) -> Value {
    Value::Object(map.iter().map(|(k, v)| (k.clone(), Value::String(v.clone()))).collect())
}

pub fn company(record: &CompanyRecord) -> Value {
    map_to_value(&record.to_map())
}

pub fn place(record: &PlaceRecord) -> Value {
    map_to_value(&record.to_map())
}

pub fn metal(record: &MetalRecord) -> Value {
    map_to_value(&record.to_map())
}

pub fn basket(record: &BasketRecord) -> Value {
    map_to_value(&record.to_map())
}

pub fn instrument(record: &InstrumentRecord) -> Value {
    map_to_value(&record.to_map())
}

pub fn period(p: &Period) -> Value {
    map_to_value(&p.to_map())
}
