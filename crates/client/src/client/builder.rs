//! Client builder for constructing [`OpsClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating and normalizing the base URL
//! - Configuring the underlying HTTP client (timeout, user agent)
//!
//! # Invariants
//! - `base_url` is required and must parse as an absolute http(s) URL
//! - The base URL is always normalized to have no trailing slashes
//! - Without an explicit timeout the transport default applies

use std::time::Duration;

use crate::client::OpsClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use opsdash_config::Config;

/// Builder for creating a new [`OpsClient`].
#[derive(Debug, Default)]
pub struct OpsClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    metrics: Option<MetricsCollector>,
}

impl OpsClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the gateway base URL, e.g. `http://localhost:8000`.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set a request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Record request metrics through the given collector.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Take base URL and timeout from loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.timeout = config.connection.timeout;
        self
    }

    /// Build the [`OpsClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` is missing or not an
    /// absolute http(s) URL, and [`ClientError::ClientBuild`] if the HTTP
    /// client cannot be constructed.
    pub fn build(self) -> Result<OpsClient> {
        let raw = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let trimmed = raw.trim().trim_end_matches('/').to_string();

        let parsed = reqwest::Url::parse(&trimmed)
            .map_err(|e| ClientError::InvalidUrl(format!("{trimmed}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ClientError::InvalidUrl(format!(
                "{trimmed}: scheme must be http or https"
            )));
        }

        let mut http = reqwest::Client::builder()
            .user_agent(concat!("opsdash/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http
            .build()
            .map_err(|e| ClientError::ClientBuild(e.to_string()))?;

        Ok(OpsClient {
            http,
            base_url: trimmed,
            metrics: self.metrics,
        })
    }
}
