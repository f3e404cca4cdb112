//! Log search endpoints: AWS profiles, log handlers and the search itself.

use reqwest::Client;

use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{LogEntry, LogSearchRequest};

const AWS_PROFILES: &str = "/api/aws-profiles";
const HANDLERS: &str = "/api/handlers";
const SEARCH: &str = "/api/search";

/// List the AWS profiles the backend can search with.
pub async fn aws_profiles(
    client: &Client,
    base_url: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<String>> {
    let url = format!("{base_url}{AWS_PROFILES}");
    let response = send_request(client.get(&url), &url, AWS_PROFILES, "GET", metrics).await?;
    read_json(response, AWS_PROFILES, metrics).await
}

/// List the log handlers available under a profile.
pub async fn handlers(
    client: &Client,
    base_url: &str,
    profile: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<String>> {
    let url = format!("{base_url}{HANDLERS}");
    let builder = client.get(&url).query(&[("profile", profile)]);
    let response = send_request(builder, &url, HANDLERS, "GET", metrics).await?;
    read_json(response, HANDLERS, metrics).await
}

/// Run a log search.
pub async fn search_logs(
    client: &Client,
    base_url: &str,
    request: &LogSearchRequest,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<LogEntry>> {
    let url = format!("{base_url}{SEARCH}");
    let builder = client.post(&url).json(request);
    let response = send_request(builder, &url, SEARCH, "POST", metrics).await?;
    read_json(response, SEARCH, metrics).await
}
