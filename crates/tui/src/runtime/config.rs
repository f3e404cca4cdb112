//! Configuration loading for the TUI.
//!
//! Responsibilities:
//! - Load configuration from the config file, the environment and CLI flags.
//!
//! Does NOT handle:
//! - Creating the backend client (see `runtime::client`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - Precedence: CLI args > env vars > config file > defaults.
//! - `load_dotenv()` is called before reading the environment.

use anyhow::{Context, Result};
use opsdash_config::{Config, ConfigLoader};

use crate::cli::Cli;

/// Load the effective configuration for this run.
pub fn load_config(cli: &Cli) -> Result<Config> {
    let mut loader = ConfigLoader::new()
        .load_dotenv()
        .context("Failed to load .env file")?;

    if let Some(path) = &cli.config_path {
        loader = loader.with_config_path(path.clone());
    }

    let mut loader = loader
        .from_config_file()
        .context("Failed to read config file")?
        .from_env()
        .context("Invalid OPSDASH_* environment variable")?;

    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(dir) = &cli.download_dir {
        loader = loader.with_download_dir(dir.clone());
    }

    let config = loader.build().context("Invalid configuration")?;
    tracing::info!(base_url = %config.connection.base_url, "Configuration loaded");
    Ok(config)
}
