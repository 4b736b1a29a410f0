//! Argument surface (SPEC_FULL.md §6), grounded in the `clap` derive style
//! used by financial-data CLIs in the retrieved example pack: a top-level
//! [`Cli`] with global flags, and one [`Command`] variant per subcommand.

use clap::{Parser, Subcommand, ValueEnum};

/// Manual exploration of entityidentity snapshots: resolve, match, list,
/// extract, and convert-unit against the companies/countries/places/metals/
/// baskets/instruments/periods domains.
#[derive(Debug, Parser)]
#[command(name = "entityidentity", author, version, about, long_about = None)]
pub struct Cli {
    /// Emit pretty-printed JSON instead of compact JSON.
    #[arg(long, global = true)]
    pub pretty: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Domains with a snapshot-backed resolver reachable from the CLI.
/// `Units` is deliberately excluded - it has its own `convert-unit`
/// subcommand rather than resolve/match/list/extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum EntityDomain {
    Companies,
    Countries,
    Places,
    Metals,
    Baskets,
    Instruments,
    Periods,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a single query to its best candidate in one domain.
    ///
    /// # Examples
    ///
    /// entityidentity resolve companies "Apple Inc" --country US
    /// entityidentity resolve metals "copper cathode"
    /// entityidentity resolve periods "Q1 2026"
    Resolve(ResolveArgs),

    /// List the top-K candidates for a query, ranked by score, regardless
    /// of whether any of them would clear a resolve threshold.
    Match(MatchArgs),

    /// List records in a domain, optionally filtered.
    List(ListArgs),

    /// Scan free text for every company or period mention it contains
    /// (the only two domains with a free-text scanning operation).
    ///
    /// Reads from `--input <FILE>` when given, otherwise from stdin.
    Extract(ExtractArgs),

    /// Normalize a priced quantity to its domain's canonical unit/basis.
    ///
    /// # Examples
    ///
    /// entityidentity convert-unit FeCr 1.10 "USD/mt" --grade Cr_pct=52 --ton-system metric
    /// entityidentity convert-unit Copper 4.25 "USD/lb"
    ConvertUnit(ConvertUnitArgs),
}

#[derive(Debug, clap::Args)]
pub struct ResolveArgs {
    #[arg(value_enum)]
    pub domain: EntityDomain,

    pub query: String,

    /// ISO2 country code, narrows companies/places candidates.
    #[arg(long)]
    pub country: Option<String>,

    /// Domain-specific disambiguation hint: a metal form/cluster, an
    /// instrument provider, or `metal:form` combined query syntax.
    #[arg(long)]
    pub hint: Option<String>,

    /// Minimum score (0-100) the best candidate must clear.
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Debug, clap::Args)]
pub struct MatchArgs {
    #[arg(value_enum)]
    pub domain: EntityDomain,

    pub query: String,

    /// Number of candidates to return.
    #[arg(short = 'k', long, default_value_t = 5)]
    pub k: usize,
}

#[derive(Debug, clap::Args)]
pub struct ListArgs {
    #[arg(value_enum)]
    pub domain: EntityDomain,

    /// ISO2 country code (companies/places only).
    #[arg(long)]
    pub country: Option<String>,

    /// Case-insensitive substring filter over name/ticker/alias fields.
    #[arg(long)]
    pub search: Option<String>,

    /// Cap the number of rows returned.
    #[arg(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, clap::Args)]
pub struct ExtractArgs {
    #[arg(value_enum)]
    pub domain: EntityDomain,

    /// Read from this file instead of stdin.
    #[arg(long)]
    pub input: Option<std::path::PathBuf>,

    /// Reference instant relative periods ("last quarter") are resolved
    /// against, as an RFC 3339 timestamp. Defaults to now.
    #[arg(long)]
    pub asof: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct ConvertUnitArgs {
    pub material: String,

    pub value: f64,

    pub unit: String,

    /// A grade component as `KEY=PCT`, e.g. `Cr_pct=52`. Repeatable.
    #[arg(long = "grade", value_name = "KEY=PCT")]
    pub grades: Vec<String>,

    /// Ton system assumed for unlabeled ton units: metric, short, or long.
    #[arg(long = "ton-system")]
    pub ton_system: Option<String>,

    #[arg(long)]
    pub basis: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_resolve_with_flags() {
        let cli = Cli::try_parse_from(["entityidentity", "resolve", "companies", "Apple Inc", "--country", "US"]).unwrap();
        match cli.command {
            Command::Resolve(args) => {
                assert_eq!(args.domain, EntityDomain::Companies);
                assert_eq!(args.query, "Apple Inc");
                assert_eq!(args.country.as_deref(), Some("US"));
            }
            other => panic!("expected Resolve, got {other:?}"),
        }
    }

    #[test]
    fn parses_convert_unit_repeated_grade() {
        let cli = Cli::try_parse_from([
            "entityidentity",
            "convert-unit",
            "FeCr",
            "1.10",
            "USD/mt",
            "--grade",
            "Cr_pct=52",
            "--ton-system",
            "metric",
        ])
        .unwrap();
        match cli.command {
            Command::ConvertUnit(args) => {
                assert_eq!(args.material, "FeCr");
                assert_eq!(args.grades, vec!["Cr_pct=52".to_string()]);
                assert_eq!(args.ton_system.as_deref(), Some("metric"));
            }
            other => panic!("expected ConvertUnit, got {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_domain() {
        assert!(Cli::try_parse_from(["entityidentity", "resolve", "galaxies", "Milky Way"]).is_err());
    }
}
