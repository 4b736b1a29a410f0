//! Common canonical-record projection (SPEC_FULL.md §3 design note:
//! "canonical records are currently dicts of mixed types... use a tagged
//! variant / sum type per domain, with a common `to_map` projection for
//! callers that want loose JSON-like output"). Every domain's owned record
//! type implements [`ToMap`] so callers that just want key/value pairs
//! (CLI rendering, logging, ad-hoc debugging) don't need to match on each
//! domain's struct shape.

use std::collections::BTreeMap;

/// Project a canonical record into its on-disk string-typed schema
/// (spec.md §3: "All columns are strings on disk; numeric and enumerated
/// values are parsed at use-site"). Absent optional fields map to an empty
/// string, matching the snapshot's own convention for a blank cell.
pub trait ToMap {
    fn to_map(&self) -> BTreeMap<String, String>;
}

/// Insert `alias1..aliasN` (`width` wide) into `map`, padding with empty
/// strings past the end of `aliases` — the fixed on-disk alias-column
/// convention every domain snapshot shares (spec.md §3, §6).
pub fn insert_aliases(map: &mut BTreeMap<String, String>, aliases: &[String], width: usize) {
    for i in 1..=width {
        let value = aliases.get(i - 1).cloned().unwrap_or_default();
        map.insert(format!("alias{i}"), value);
    }
}
