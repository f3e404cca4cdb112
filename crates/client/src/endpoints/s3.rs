//! S3 browsing endpoints.

use reqwest::Client;

use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{S3Entry, S3Object};

const S3_LIST: &str = "/api/s3/list";
const S3_OBJECT: &str = "/api/s3/object";

/// List the folders and files directly under `prefix`.
pub async fn s3_list(
    client: &Client,
    base_url: &str,
    bucket: &str,
    prefix: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Vec<S3Entry>> {
    let url = format!("{base_url}{S3_LIST}");
    let builder = client
        .get(&url)
        .query(&[("bucket", bucket), ("prefix", prefix)]);
    let response = send_request(builder, &url, S3_LIST, "GET", metrics).await?;
    read_json(response, S3_LIST, metrics).await
}

/// Fetch one object with its content inlined as a data URL.
pub async fn s3_object(
    client: &Client,
    base_url: &str,
    bucket: &str,
    key: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<S3Object> {
    let url = format!("{base_url}{S3_OBJECT}");
    let builder = client.get(&url).query(&[("bucket", bucket), ("key", key)]);
    let response = send_request(builder, &url, S3_OBJECT, "GET", metrics).await?;
    read_json(response, S3_OBJECT, metrics).await
}
