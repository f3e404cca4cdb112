//! Canned report endpoints and the health probe.

use reqwest::Client;

use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{HealthStatus, LabelDay, LabelsOutput, ToolReport};

const MODEM_FAILED_COUNT: &str = "/api/tools/modem-failed-count";
const HEALTH: &str = "/health";

/// Generate the labels report for a day.
pub async fn labels(
    client: &Client,
    base_url: &str,
    day: LabelDay,
    metrics: Option<&MetricsCollector>,
) -> Result<LabelsOutput> {
    let url = format!("{base_url}{}", day.path());
    let response = send_request(client.get(&url), &url, day.path(), "GET", metrics).await?;
    read_json(response, day.path(), metrics).await
}

/// Fetch the modem failure statistics.
pub async fn modem_failed_count(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<ToolReport> {
    let url = format!("{base_url}{MODEM_FAILED_COUNT}");
    let response =
        send_request(client.get(&url), &url, MODEM_FAILED_COUNT, "GET", metrics).await?;
    read_json(response, MODEM_FAILED_COUNT, metrics).await
}

/// Probe the backend's health endpoint.
pub async fn health(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<HealthStatus> {
    let url = format!("{base_url}{HEALTH}");
    let response = send_request(client.get(&url), &url, HEALTH, "GET", metrics).await?;
    read_json(response, HEALTH, metrics).await
}
