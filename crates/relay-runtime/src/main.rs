//! # Relay
//!
//! Entry point for the `relay` binary.
//!
//! ## Startup Sequence
//!
//! 1. Parse the command line
//! 2. Load configuration from the environment
//! 3. Initialize logging and metrics
//! 4. Validate configuration and wire both engines
//! 5. Run the command

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::error;

use relay_runtime::cli::{self, Cli};
use relay_runtime::{RelayContainer, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let config = RuntimeConfig::from_env().context("Invalid relay configuration")?;
    relay_telemetry::init_telemetry(&config.telemetry)?;

    let container = RelayContainer::new(config)?;

    let mut stdout = io::stdout().lock();
    if let Err(e) = cli::run(args.command, &container, &mut stdout).await {
        error!(error = %e, "Command failed");
        return Err(e);
    }
    Ok(())
}
