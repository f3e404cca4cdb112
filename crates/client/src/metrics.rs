//! Metrics collection for backend API calls.
//!
//! This module provides metrics collection for opsdash API calls, including:
//! - Request latency histograms
//! - Request and error counters
//! - Error categorization
//!
//! # What this module does NOT handle:
//! - Metrics exposition/export (see [`crate::metrics_exporter`])
//!
//! # Invariants
//! - All metrics use consistent label names: `endpoint`, `method`, `status`, `error_category`
//! - Metric recording is infallible and never disrupts API calls
//! - Zero-cost when no metrics recorder is installed

use crate::error::ClientError;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "opsdash_api_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "opsdash_api_requests_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "opsdash_api_errors_total";

/// Metric name for deserialization failure counter.
pub const METRIC_DESERIALIZATION_FAILURES: &str = "opsdash_api_deserialization_failures_total";

/// Metric name for results dropped because a newer request superseded them.
pub const METRIC_STALE_RESULTS_DROPPED: &str = "opsdash_tui_stale_results_dropped_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// No response reached the client.
    Transport,
    /// HTTP 4xx client errors
    Http4xx,
    /// HTTP 5xx server errors
    Http5xx,
    /// Response body did not match the expected model.
    Decode,
    /// Local I/O or client construction failures.
    Local,
}

impl ErrorCategory {
    /// Returns the string label for this error category.
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::Decode => "decode",
            ErrorCategory::Local => "local",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::Transport { .. } => ErrorCategory::Transport,
            ClientError::Remote { status, .. } if (500..600).contains(status) => {
                ErrorCategory::Http5xx
            }
            ClientError::Remote { .. } => ErrorCategory::Http4xx,
            ClientError::InvalidResponse(_) => ErrorCategory::Decode,
            ClientError::InvalidUrl(_) | ClientError::Io(_) | ClientError::ClientBuild(_) => {
                ErrorCategory::Local
            }
        }
    }
}

/// Metrics collector for opsdash API calls.
///
/// A lightweight wrapper around the `metrics` crate macros with consistent labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled metrics collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of an API request.
    ///
    /// `status` is `None` when the request failed before receiving a response.
    pub fn record_request_duration(
        &self,
        endpoint: &str,
        method: &str,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt.
    pub fn record_request(&self, endpoint: &str, method: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
        )
        .increment(1);
    }

    /// Record an error under an explicit category.
    pub fn record_error(&self, endpoint: &str, method: &str, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.to_string(),
            "method" => method.to_string(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }

    /// Record an error, categorizing it automatically.
    pub fn record_client_error(&self, endpoint: &str, method: &str, error: &ClientError) {
        self.record_error(endpoint, method, ErrorCategory::from(error));
    }

    /// Record a body that failed to deserialize into its model.
    pub fn record_deserialization_failure(&self, endpoint: &str, model: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_DESERIALIZATION_FAILURES,
            "endpoint" => endpoint.to_string(),
            "model" => model.to_string(),
        )
        .increment(1);
    }

    /// Record a result that arrived after its view had moved on.
    pub fn record_stale_result(&self, view: &str) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_STALE_RESULTS_DROPPED, "view" => view.to_string()).increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_from_remote_status() {
        let err = ClientError::Remote {
            status: 503,
            url: "u".into(),
            message: "m".into(),
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http5xx);

        let err = ClientError::Remote {
            status: 400,
            url: "u".into(),
            message: "m".into(),
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http4xx);
    }

    #[test]
    fn test_error_category_transport_and_decode() {
        let err = ClientError::Transport {
            url: "u".into(),
            message: "m".into(),
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Transport);
        assert_eq!(
            ErrorCategory::from(&ClientError::InvalidResponse("x".into())).as_str(),
            "decode"
        );
    }

    #[test]
    fn test_disabled_collector_records_nothing() {
        let collector = MetricsCollector::disabled();
        assert!(!collector.is_enabled());
        // No recorder installed; calls must simply not panic.
        collector.record_request("/api/s3/list", "GET");
        collector.record_request_duration("/api/s3/list", "GET", Duration::from_millis(5), None);
    }
}
