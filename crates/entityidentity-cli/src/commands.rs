//! Command handlers: one function per [`crate::args::Command`] variant,
//! loading whichever domain snapshot(s) the query needs and rendering the
//! result as a `serde_json::Value` for [`crate::lib::run`] to print.

use std::path::Path;

use anyhow::{bail, Context, Result};
use serde_json::{json, Value};

use crate::args::{ConvertUnitArgs, EntityDomain, ExtractArgs, ListArgs, MatchArgs, ResolveArgs};
use crate::json as render;

/// Every domain crate resolves its own snapshot path search from this
/// directory outward (spec.md §4.3); the CLI crate's own manifest dir is as
/// good a starting point as any other workspace member's.
fn crate_dir() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

fn load_metals() -> Result<Vec<entityidentity_metals::MetalRecord>> {
    entityidentity_metals::load_metals(None, crate_dir()).context("loading metals snapshot")
}

pub fn resolve(args: &ResolveArgs) -> Result<Value> {
    let tuning = entityidentity_config::ResolverTuning::default();
    let threshold_default = args.threshold.unwrap_or(tuning.default_threshold);

    let value = match args.domain {
        EntityDomain::Companies => {
            let records = entityidentity_companies::load_companies(None, crate_dir()).context("loading companies snapshot")?;
            let result = entityidentity_companies::resolve_company(
                &args.query,
                &records,
                args.country.as_deref(),
                tuning.high_conf_threshold,
                tuning.high_conf_gap,
                tuning.uncertain_threshold,
            );
            match result.best() {
                Some(m) => json!({
                    "match": render::company(m.record),
                    "score": m.explain.score,
                    "decision": format!("{:?}", result.decision),
                }),
                None => json!({"match": Value::Null, "decision": format!("{:?}", result.decision)}),
            }
        }
        EntityDomain::Countries => {
            let code = entityidentity_countries::country_identifier_fuzzy(
                &args.query,
                entityidentity_countries::CodeSystem::Iso2,
                true,
                true,
                args.threshold.unwrap_or(85.0),
            );
            json!({"match": code})
        }
        EntityDomain::Places => {
            let records = entityidentity_places::load_places(None, crate_dir()).context("loading places snapshot")?;
            let result = entityidentity_places::resolve_place(&args.query, &records, args.country.as_deref(), threshold_default);
            match result.best {
                Some(m) => json!({"match": render::place(m.record), "score": m.score}),
                None => json!({"match": Value::Null}),
            }
        }
        EntityDomain::Metals => {
            let records = load_metals()?;
            let category = args.hint.as_deref();
            let matched = entityidentity_metals::resolve_metal(&args.query, &records, None, category, threshold_default);
            match matched {
                Some(m) => json!({"match": render::metal(m.record), "score": m.score}),
                None => json!({"match": Value::Null}),
            }
        }
        EntityDomain::Baskets => {
            let records = entityidentity_baskets::load_baskets(None, crate_dir()).context("loading baskets snapshot")?;
            let matched = entityidentity_baskets::resolve_basket(&args.query, &records, threshold_default);
            match matched {
                Some(m) => json!({"match": render::basket(m.record), "score": m.score}),
                None => json!({"match": Value::Null}),
            }
        }
        EntityDomain::Instruments => {
            let metals = load_metals()?;
            let records = entityidentity_instruments::load_instruments(None, crate_dir(), &metals).context("loading instruments snapshot")?;
            let matched =
                entityidentity_instruments::resolve_instrument(&args.query, &records, args.hint.as_deref(), None, threshold_default);
            match matched {
                Some(m) => json!({"match": render::instrument(m.record), "score": m.score}),
                None => json!({"match": Value::Null}),
            }
        }
        EntityDomain::Periods => {
            let resolved = entityidentity_period::resolve_period(&args.query, None);
            match resolved {
                Some(p) => json!({"match": render::period(&p)}),
                None => json!({"match": Value::Null}),
            }
        }
    };
    Ok(value)
}

pub fn run_match(args: &MatchArgs) -> Result<Value> {
    let matches: Vec<Value> = match args.domain {
        EntityDomain::Companies => {
            let records = entityidentity_companies::load_companies(None, crate_dir())?;
            entityidentity_companies::match_company(&args.query, &records, args.k, None)
                .iter()
                .map(|m| json!({"record": render::company(m.record), "score": m.explain.score}))
                .collect()
        }
        EntityDomain::Countries => bail!("countries has no match; use resolve"),
        EntityDomain::Places => {
            let records = entityidentity_places::load_places(None, crate_dir())?;
            entityidentity_places::match_place(&args.query, &records, args.k, None)
                .iter()
                .map(|m| json!({"record": render::place(m.record), "score": m.score}))
                .collect()
        }
        EntityDomain::Metals => {
            let records = load_metals()?;
            entityidentity_metals::match_metal(&args.query, &records, args.k)
                .iter()
                .map(|m| json!({"record": render::metal(m.record), "score": m.score}))
                .collect()
        }
        EntityDomain::Baskets => {
            let records = entityidentity_baskets::load_baskets(None, crate_dir())?;
            entityidentity_baskets::match_basket(&args.query, &records, args.k)
                .iter()
                .map(|m| json!({"record": render::basket(m.record), "score": m.score}))
                .collect()
        }
        EntityDomain::Instruments => {
            let metals = load_metals()?;
            let records = entityidentity_instruments::load_instruments(None, crate_dir(), &metals)?;
            entityidentity_instruments::match_instruments(&args.query, &records, None, None, args.k)
                .iter()
                .map(|m| json!({"record": render::instrument(m.record), "score": m.score}))
                .collect()
        }
        EntityDomain::Periods => bail!("periods has no ranked match; use extract to scan free text or resolve for a single period expression"),
    };
    Ok(json!({"matches": matches}))
}

pub fn list(args: &ListArgs) -> Result<Value> {
    let records: Vec<Value> = match args.domain {
        EntityDomain::Companies => {
            let records = entityidentity_companies::load_companies(None, crate_dir())?;
            entityidentity_companies::list_companies(&records, args.country.as_deref(), args.search.as_deref(), args.limit)
                .iter()
                .map(|r| render::company(r))
                .collect()
        }
        EntityDomain::Countries => bail!("countries has no list; the catalog is the fixed ISO 3166-1 table"),
        EntityDomain::Places => {
            let records = entityidentity_places::load_places(None, crate_dir())?;
            let mut rows: Vec<Value> = entityidentity_places::list_places(&records, args.country.as_deref())
                .into_iter()
                .filter(|r| {
                    args.search.as_deref().map_or(true, |s| {
                        let needle = s.to_lowercase();
                        r.admin1.to_lowercase().contains(&needle) || r.admin1_norm.contains(&needle)
                    })
                })
                .map(render::place)
                .collect();
            if let Some(limit) = args.limit {
                rows.truncate(limit);
            }
            rows
        }
        EntityDomain::Metals => {
            let records = load_metals()?;
            let mut rows: Vec<Value> = entityidentity_metals::list_metals(&records, None, None)
                .into_iter()
                .filter(|r| {
                    args.search.as_deref().map_or(true, |s| {
                        let needle = s.to_lowercase();
                        r.name.to_lowercase().contains(&needle) || r.name_norm.contains(&needle)
                    })
                })
                .map(render::metal)
                .collect();
            if let Some(limit) = args.limit {
                rows.truncate(limit);
            }
            rows
        }
        EntityDomain::Baskets => {
            let records = entityidentity_baskets::load_baskets(None, crate_dir())?;
            let mut rows: Vec<Value> = entityidentity_baskets::list_baskets(&records)
                .into_iter()
                .filter(|r| {
                    args.search.as_deref().map_or(true, |s| {
                        let needle = s.to_lowercase();
                        r.name.to_lowercase().contains(&needle) || r.name_norm.contains(&needle)
                    })
                })
                .map(render::basket)
                .collect();
            if let Some(limit) = args.limit {
                rows.truncate(limit);
            }
            rows
        }
        EntityDomain::Instruments => {
            let metals = load_metals()?;
            let records = entityidentity_instruments::load_instruments(None, crate_dir(), &metals)?;
            let mut rows: Vec<Value> = entityidentity_instruments::list_instruments(&records, None, args.search.as_deref())
                .into_iter()
                .map(render::instrument)
                .collect();
            if let Some(limit) = args.limit {
                rows.truncate(limit);
            }
            rows
        }
        EntityDomain::Periods => bail!("periods has no list; periods are parsed from text, not enumerated from a snapshot"),
    };
    Ok(json!({"records": records}))
}

pub fn extract(args: &ExtractArgs) -> Result<Value> {
    let text = match &args.input {
        Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
        None => {
            use std::io::Read;
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf).context("reading stdin")?;
            buf
        }
    };

    match args.domain {
        EntityDomain::Periods => {
            let asof = args
                .asof
                .as_deref()
                .map(|s| {
                    chrono::DateTime::parse_from_rfc3339(s)
                        .map(|dt| dt.with_timezone(&chrono::Utc))
                        .with_context(|| format!("parsing --asof {s}"))
                })
                .transpose()?;
            let periods: Vec<Value> = entityidentity_period::extract_periods(&text, asof).iter().map(render::period).collect();
            Ok(json!({"periods": periods}))
        }
        EntityDomain::Companies => {
            let records = entityidentity_companies::load_companies(None, crate_dir())?;
            let hits: Vec<Value> = entityidentity_companies::extractor::extract_companies(&text, &records, None, 0.76)
                .iter()
                .map(|m| json!({"record": render::company(m.record), "score": m.explain.score}))
                .collect();
            Ok(json!({"companies": hits}))
        }
        _ => bail!("extract supports only the companies and periods domains (free-text scanning has no meaning for a point lookup in {:?})", args.domain),
    }
}

pub fn convert_unit(args: &ConvertUnitArgs) -> Result<Value> {
    let mut grade = std::collections::HashMap::new();
    for entry in &args.grades {
        let (key, pct) = entry
            .split_once('=')
            .with_context(|| format!("--grade {entry:?} is not in KEY=PCT form"))?;
        let pct: f64 = pct.parse().with_context(|| format!("--grade {entry:?} has a non-numeric percentage"))?;
        grade.insert(key.to_string(), pct);
    }
    let ton_system = args
        .ton_system
        .as_deref()
        .map(|s| entityidentity_units::TonSystem::parse(s).with_context(|| format!("unrecognized --ton-system {s:?}")))
        .transpose()?;

    let raw = entityidentity_units::UnitInput {
        value: args.value,
        unit: args.unit.clone(),
        basis: args.basis.clone(),
        grade,
        ton_system,
        material: Some(args.material.clone()),
    };
    let result = entityidentity_units::normalize_unit(&raw);
    Ok(json!({
        "raw": {"value": result.raw.value, "unit": result.raw.unit, "basis": result.raw.basis},
        "norm": {"value": result.norm.value, "unit": result.norm.unit, "basis": result.norm.basis},
        "warning": result.warning,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_unit_rejects_malformed_grade() {
        let args = ConvertUnitArgs {
            material: "FeCr".to_string(),
            value: 1.10,
            unit: "USD/mt".to_string(),
            grades: vec!["not-a-pair".to_string()],
            ton_system: None,
            basis: None,
        };
        assert!(convert_unit(&args).is_err());
    }

    #[test]
    fn convert_unit_converts_with_complete_inputs() {
        let args = ConvertUnitArgs {
            material: "FeCr".to_string(),
            value: 1.10,
            unit: "USD/mt".to_string(),
            grades: vec!["Cr_pct=52".to_string()],
            ton_system: Some("metric".to_string()),
            basis: None,
        };
        let value = convert_unit(&args).unwrap();
        assert!(value["warning"].is_null());
        assert_eq!(value["norm"]["unit"], "USD/lb");
    }

    #[test]
    fn convert_unit_rejects_bad_ton_system() {
        let args = ConvertUnitArgs {
            material: "FeCr".to_string(),
            value: 1.10,
            unit: "USD/mt".to_string(),
            grades: vec!["Cr_pct=52".to_string()],
            ton_system: Some("imperial".to_string()),
            basis: None,
        };
        assert!(convert_unit(&args).is_err());
    }
}
