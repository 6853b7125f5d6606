//! Main entry point for the transcoder-rs CLI tool
//!
//! Inspects the charset alias table and decodes files from a declared charset
//! into UTF-8.

use clap::Parser;
use log::info;

mod cli;

use cli::Cli;
use transcoder::TranscoderConfig;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over --verbose
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    info!("Starting transcoder-rs v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = TranscoderConfig::load().unwrap_or_else(|e| {
        eprintln!("Warning: Failed to load config: {}, using defaults", e);
        TranscoderConfig::default()
    });

    // Execute CLI logic
    cli.run(config)?;

    Ok(())
}
