//! Contact Book - Main entry point
//!
//! Starts the interactive address-book assistant: loads configuration,
//! initializes stderr logging, and runs the command loop.

use anyhow::Result;
use contact_book::{repl, Config};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first; the log filter default comes from it.
    let config = Config::from_env()?;

    // Initialize logging (stderr only to keep stdout clean for responses)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Configuration loaded successfully");

    repl::run(&config)?;

    info!("Contact book shutdown complete");
    Ok(())
}
