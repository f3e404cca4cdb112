//! Main backend API client.
//!
//! This module provides [`OpsClient`], a thin typed wrapper over the
//! gateway's REST surface.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `person`, `device`, `logs`, `s3`, `batch`, `reports`: API methods by area
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retries (every call is single-shot)
//!
//! # Invariants
//! - `base_url` never ends with `/`
//! - Methods take `&self`; the client is cheap to share behind an `Arc`

pub mod builder;

mod batch;
mod device;
mod logs;
mod person;
mod reports;
mod s3;

use crate::error::Result;
use crate::metrics::MetricsCollector;
use opsdash_config::Config;

/// Backend API client.
///
/// ```rust,ignore
/// use opsdash_client::OpsClient;
///
/// let client = OpsClient::builder()
///     .base_url("http://localhost:8000".to_string())
///     .build()?;
/// let person = client.person_lookup("6f1c...").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OpsClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl OpsClient {
    /// Create a new client builder.
    pub fn builder() -> builder::OpsClientBuilder {
        builder::OpsClientBuilder::new()
    }

    /// Build a client from loaded configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::builder().from_config(config).build()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn metrics(&self) -> Option<&MetricsCollector> {
        self.metrics.as_ref()
    }
}
