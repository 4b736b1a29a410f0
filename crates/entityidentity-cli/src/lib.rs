//! Command-line entry point (SPEC_FULL.md §6), grounded in the teacher's
//! `otlp2parquet-cli` operator binary: a thin `run()` that parses argv,
//! initializes tracing, dispatches to a domain crate, and prints JSON.
//! Explicitly "plumbing" (spec.md §1) - the core resolver crates carry the
//! correctness contract, this crate only wires them up for manual use.

pub mod args;
pub mod commands;
pub mod init;
pub mod json;

use anyhow::Result;
use clap::Parser;

use args::{Cli, Command};

/// Parse argv, run the requested command, and print its JSON result to
/// stdout. Errors (bad snapshot path, malformed `--grade`, unsupported
/// domain/command combination) are returned for the binary's `main` to
/// report and exit non-zero with.
pub fn run() -> Result<()> {
    init::init_tracing();
    let cli = Cli::parse();

    let value = match &cli.command {
        Command::Resolve(args) => commands::resolve(args)?,
        Command::Match(args) => commands::run_match(args)?,
        Command::List(args) => commands::list(args)?,
        Command::Extract(args) => commands::extract(args)?,
        Command::ConvertUnit(args) => commands::convert_unit(args)?,
    };

    let rendered = if cli.pretty { serde_json::to_string_pretty(&value)? } else { serde_json::to_string(&value)? };
    println!("{rendered}");
    Ok(())
}
