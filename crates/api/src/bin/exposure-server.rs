//! Assessment API binary entry point
//!
//! Loads configuration, initializes tracing and serves the HTTP API.

use agent_exposure_api::ExposureServer;
use agent_exposure_common::{init_tracing_with_level, ExposureConfig};
use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "exposure-server")]
#[command(about = "HTTP API for the agent exposure assessment")]
struct Args {
    /// Config file path
    #[arg(short, long, default_value = "exposure.toml", env = "EXPOSURE_CONFIG")]
    config: PathBuf,

    /// Override the configured bind address
    #[arg(short, long)]
    bind: Option<String>,

    /// Override the configured log level
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let config_found = args.config.exists();
    let mut config = if config_found {
        ExposureConfig::from_file(&args.config)
            .with_context(|| format!("Failed to load config from {}", args.config.display()))?
    } else {
        ExposureConfig::default()
    };

    if let Some(bind) = args.bind {
        config.server.bind_addr = bind;
    }
    if let Some(level) = args.log_level {
        config.logging.level = level;
    }
    config.validate().context("Invalid configuration")?;

    init_tracing_with_level(&config.logging.level)?;
    if !config_found {
        tracing::warn!("Config file {} not found, using defaults", args.config.display());
    }

    ExposureServer::new(config).run().await
}
