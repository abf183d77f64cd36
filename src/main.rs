//! Container Race - Application Entry Point
//!
//! Reads configuration from the environment, races the containers and prints
//! the report to stdout. Logs go to stderr.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use container_race::{Config, benchmark};

fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.rust_log.clone().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!(
        data_file = %config.race.data_file.display(),
        rounds = config.race.rounds,
        "Starting container race..."
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    benchmark::run_and_report(&config, &mut out)?;

    Ok(())
}
