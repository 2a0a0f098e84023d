//! Hits to kill for each hit dice count, by direct calculation.

use std::io;

use anyhow::Result;
use hitdice::program::run_exact;
use hitdice::{self_test, Report};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    // A failed battery returns before any output and exits with status 1.
    run_exact(&mut io::stdout().lock(), &Report::default(), self_test::run)?;
    Ok(())
}
