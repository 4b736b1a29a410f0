//! Owned basket record, materialized from a [`Snapshot`] row
//! (`baskets/basketapi.py::load_baskets`).

use std::collections::BTreeMap;

use entityidentity_core::record::{insert_aliases, ToMap};
use entityidentity_snapshot::Snapshot;

/// One basket component: a metal symbol, optionally with a weight
/// percentage (`"symbol"` or `"symbol:weight_pct"`, spec.md §3).
#[derive(Debug, Clone, PartialEq)]
pub struct Component {
    pub symbol: String,
    pub weight_pct: Option<f64>,
}

impl Component {
    fn parse(raw: &str) -> Option<Component> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.split_once(':') {
            Some((symbol, weight)) => Some(Component {
                symbol: symbol.trim().to_string(),
                weight_pct: weight.trim().parse().ok(),
            }),
            None => Some(Component { symbol: raw.to_string(), weight_pct: None }),
        }
    }

    /// Inverse of [`Component::parse`]: `"symbol"` or `"symbol:weight_pct"`.
    fn render(&self) -> String {
        match self.weight_pct {
            Some(pct) => format!("{}:{}", self.symbol, pct),
            None => self.symbol.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BasketRecord {
    pub basket_id: String,
    pub basket_key: String,
    pub name: String,
    pub name_norm: String,
    pub description: Option<String>,
    pub components: Vec<Component>,
    pub aliases: Vec<String>,
    pub aliases_norm: Vec<String>,
}

fn opt(snapshot: &Snapshot, row: &[String], column: &str) -> Option<String> {
    snapshot.get(row, column).map(str::trim).filter(|s| !s.is_empty()).map(str::to_string)
}

pub fn build_records(snapshot: &Snapshot) -> Vec<BasketRecord> {
    snapshot
        .rows()
        .iter()
        .map(|row| {
            let name = snapshot.get(row, "name").unwrap_or("").to_string();
            let name_norm = snapshot
                .get(row, "name_norm")
                .map(str::to_string)
                .unwrap_or_else(|| crate::normalize::normalize_basket_name(&name));
            let aliases: Vec<String> = snapshot.aliases(row, 10).into_iter().map(str::to_string).collect();
            let aliases_norm = aliases.iter().map(|a| crate::normalize::normalize_basket_name(a)).collect();
            let basket_id = snapshot
                .get(row, "basket_id")
                .map(str::to_string)
                .unwrap_or_else(|| crate::normalize::generate_basket_id(&name));
            let basket_key = snapshot
                .get(row, "basket_key")
                .map(str::to_string)
                .unwrap_or_else(|| crate::normalize::slugify_basket_name(&name));
            let components: Vec<Component> = (1..=10)
                .filter_map(|i| snapshot.get(row, &format!("component{i}")))
                .filter(|c| !c.is_empty())
                .filter_map(Component::parse)
                .collect();
            BasketRecord {
                basket_id,
                basket_key,
                name,
                name_norm,
                description: opt(snapshot, row, "description"),
                components,
                aliases,
                aliases_norm,
            }
        })
        .collect()
}

impl ToMap for BasketRecord {
    fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = BTreeMap::new();
        map.insert("basket_id".to_string(), self.basket_id.clone());
        map.insert("basket_key".to_string(), self.basket_key.clone());
        map.insert("name".to_string(), self.name.clone());
        map.insert("name_norm".to_string(), self.name_norm.clone());
        map.insert("description".to_string(), self.description.clone().unwrap_or_default());
        for i in 1..=10 {
            let value = self.components.get(i - 1).map(Component::render).unwrap_or_default();
            map.insert(format!("component{i}"), value);
        }
        insert_aliases(&mut map, &self.aliases, 10);
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn component_parses_bare_symbol() {
        assert_eq!(Component::parse("Pt"), Some(Component { symbol: "Pt".to_string(), weight_pct: None }));
    }

    #[test]
    fn component_parses_weighted_symbol() {
        assert_eq!(
            Component::parse("Pt:40.0"),
            Some(Component { symbol: "Pt".to_string(), weight_pct: Some(40.0) })
        );
    }

    #[test]
    fn component_skips_blank() {
        assert_eq!(Component::parse("  "), None);
    }
}
