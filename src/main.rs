//! Thin wrapper binary. All command parsing and dispatch lives in
//! `entityidentity-cli`; this mirrors the teacher's root binary delegating
//! into its runtime crates rather than implementing behavior itself.

fn main() -> anyhow::Result<()> {
    entityidentity_cli::run()
}
