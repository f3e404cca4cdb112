//! Command-line argument parsing for opsdash.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//!
//! Does NOT handle:
//! - Configuration loading or validation (see `runtime::config`).
//! - Environment variable parsing for config values (handled by `opsdash_config`).
//!
//! Invariants:
//! - CLI arguments are parsed once at startup via `Cli::parse()`.

use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments for opsdash.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments (e.g., --base-url, --config-path)
/// 2. Environment variables (e.g., OPSDASH_BASE_URL)
/// 3. Config file (config.json)
/// 4. Default values
#[derive(Debug, Parser)]
#[command(
    name = "opsdash",
    about = "Terminal dashboard for the operations backend",
    version,
    after_help = "Examples:\n  opsdash\n  opsdash --base-url http://localhost:8080\n  opsdash --config-path ./opsdash.json --no-mouse\n  opsdash --log-dir /var/log/opsdash --assume-yes\n"
)]
pub struct Cli {
    /// Backend base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Path to a custom configuration file
    #[arg(long)]
    pub config_path: Option<PathBuf>,

    /// Directory for saved downloads
    #[arg(long)]
    pub download_dir: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Answer yes to every confirmation prompt
    #[arg(long)]
    pub assume_yes: bool,

    /// Enable Prometheus metrics endpoint and bind address (e.g., "localhost:9090")
    #[arg(long, env = "OPSDASH_METRICS_BIND")]
    pub metrics_bind: Option<String>,
}
