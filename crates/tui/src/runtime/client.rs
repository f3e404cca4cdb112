//! Backend client creation.
//!
//! Responsibilities:
//! - Build the shared [`OpsClient`] from loaded configuration.
//!
//! Does NOT handle:
//! - Configuration loading (see `runtime::config`).

use anyhow::{Context, Result};
use opsdash_client::{MetricsCollector, OpsClient};
use opsdash_config::Config;

/// Create the backend client, recording request metrics when `metrics` is set.
pub fn create_client(config: &Config, metrics: Option<MetricsCollector>) -> Result<OpsClient> {
    let mut builder = OpsClient::builder().from_config(config);
    if let Some(metrics) = metrics {
        builder = builder.metrics(metrics);
    }
    builder
        .build()
        .with_context(|| format!("Invalid backend URL '{}'", config.connection.base_url))
}
