//! Tic Tac Toe - terminal entry point.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictac::{AppConfig, Cli, init_tracing};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load config from {}", cli.config.display()))?
        .with_overrides(cli.seed, cli.log_file);

    init_tracing(config.log_file(), config.log_filter())?;
    info!(config_path = %cli.config.display(), "Configuration loaded");

    tictac::run(&config)
}
