//! Hits to kill for each hit dice count, by random simulation.

use std::io;

use anyhow::Result;
use hitdice::program::run_simulated;
use hitdice::{Report, Simulator};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let mut simulator = Simulator::default();
    run_simulated(&mut io::stdout().lock(), &Report::default(), &mut simulator)?;
    Ok(())
}
