//! Trend analysis CLI application.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::Path;
use tracing::debug;
use trend_config::{load_config, AppConfig};
use trend_monitor::{setup_logging, LogFormat};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // validate-config reports load errors itself
    let (config, from_file) = match cli.command {
        Commands::ValidateConfig => (AppConfig::default(), false),
        _ => load_settings(&cli.config)?,
    };

    // Setup logging
    let level = cli
        .log_level
        .map(|l| l.as_str())
        .unwrap_or(config.logging.level.as_str());
    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        config
            .logging
            .format
            .parse()
            .map_err(anyhow::Error::msg)?
    };
    let _guard = setup_logging(level, format, config.logging.file.as_deref());

    if !from_file {
        debug!(path = %cli.config.display(), "No configuration file, using defaults");
    }

    // Execute command
    match cli.command {
        Commands::Analyze(args) => cli::commands::analyze::run(args, &config).await,
        Commands::Indicators => cli::commands::indicators::run(&config.analysis.params),
        Commands::ValidateConfig => cli::commands::validate::run(&cli.config),
    }
}

/// Load the configuration file, falling back to defaults when it is absent.
fn load_settings(path: &Path) -> Result<(AppConfig, bool)> {
    if !path.exists() {
        return Ok((AppConfig::default(), false));
    }
    let config = load_config(path)
        .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
    Ok((config, true))
}
