//! Device lookup and shadow update endpoints.

use reqwest::Client;
use serde_json::{Map, Value};

use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{DeviceLookup, MessageResponse, ShadowUpdateRequest};

const DEVICE_LOOKUP: &str = "/api/device_lookup";
const UPDATE_SHADOW: &str = "/api/update_shadow";

/// Look up a device by ICCID.
pub async fn device_lookup(
    client: &Client,
    base_url: &str,
    iccid: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<DeviceLookup> {
    let url = format!("{base_url}{DEVICE_LOOKUP}");
    let builder = client.get(&url).query(&[("iccid", iccid)]);
    let response = send_request(builder, &url, DEVICE_LOOKUP, "GET", metrics).await?;
    read_json(response, DEVICE_LOOKUP, metrics).await
}

/// Write keys into the device shadow's desired state.
pub async fn update_shadow(
    client: &Client,
    base_url: &str,
    iccid: &str,
    desired_state: Map<String, Value>,
    metrics: Option<&MetricsCollector>,
) -> Result<MessageResponse> {
    let url = format!("{base_url}{UPDATE_SHADOW}");
    let body = ShadowUpdateRequest {
        iccid: iccid.to_string(),
        desired_state,
    };
    let builder = client.post(&url).json(&body);
    let response = send_request(builder, &url, UPDATE_SHADOW, "POST", metrics).await?;
    read_json(response, UPDATE_SHADOW, metrics).await
}
