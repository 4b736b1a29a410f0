//! Snapshot-store error taxonomy (spec.md §7, SPEC_FULL.md §7).
//!
//! Resolvers themselves never return `Err` — "not found" is `None`/empty
//! `Vec`. A `SnapshotError` can only surface while loading the backing data
//! file, and is propagated with `?` up to the CLI boundary.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("no {subdirectory} data found in standard locations (searched {} location(s))", .searched.len())]
    NotFound {
        subdirectory: &'static str,
        searched: Vec<PathBuf>,
        remedies: Vec<String>,
    },

    #[error("snapshot at {path} is missing required column(s): {missing:?}")]
    SchemaMismatch { path: PathBuf, missing: Vec<String> },

    #[error("failed to read parquet file {path}: {source}")]
    Parquet {
        path: PathBuf,
        #[source]
        source: parquet::errors::ParquetError,
    },

    #[error("failed to read csv file {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("unsupported snapshot file extension on {path}: expected .parquet or .csv")]
    UnsupportedFormat { path: PathBuf },

    #[error("failed to open {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SnapshotError {
    /// Full multi-line diagnostic for `NotFound`, matching the Python
    /// original's `format_not_found_error` (`utils/dataloader.py`): a list
    /// of every location searched, followed by remediation steps. Other
    /// variants fall back to their single-line `Display`.
    pub fn diagnostic(&self) -> String {
        match self {
            SnapshotError::NotFound {
                subdirectory,
                searched,
                remedies,
            } => {
                let mut lines = vec![format!("No {subdirectory} data found in standard locations.\n")];
                lines.push("Searched:".to_string());
                for (i, path) in searched.iter().enumerate() {
                    lines.push(format!("  {}. {}", i + 1, path.display()));
                }
                lines.push("\nTo fix:".to_string());
                for remedy in remedies {
                    lines.push(format!("  • {remedy}"));
                }
                lines.join("\n")
            }
            other => other.to_string(),
        }
    }
}
