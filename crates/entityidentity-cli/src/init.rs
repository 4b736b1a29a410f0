//! Tracing setup (`otlp2parquet-server::init::init_tracing`, simplified: no
//! JSON/text format switch, since the CLI is a one-shot human-facing tool
//! rather than a long-running service).

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a `tracing` subscriber reading its filter from `RUST_LOG`,
/// defaulting to `warn` so resolver diagnostics don't drown out command
/// output on stdout.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry().with(env_filter).with(fmt::layer().with_writer(std::io::stderr)).init();
}
