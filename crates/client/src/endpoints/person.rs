//! Person lookup and Cognito enable/disable endpoints.

use reqwest::Client;

use crate::endpoints::{read_json, send_request};
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{MessageResponse, PersonLookup, SetPersonEnabledRequest};

const PERSON_LOOKUP: &str = "/api/person_lookup";
const SET_PERSON_ENABLED: &str = "/api/set_person_enabled_status";

/// Look up a person's account and Cognito user.
pub async fn person_lookup(
    client: &Client,
    base_url: &str,
    person_id: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<PersonLookup> {
    let url = format!("{base_url}{PERSON_LOOKUP}");
    let builder = client.get(&url).query(&[("person_id", person_id)]);
    let response = send_request(builder, &url, PERSON_LOOKUP, "GET", metrics).await?;
    read_json(response, PERSON_LOOKUP, metrics).await
}

/// Enable or disable a person's Cognito user.
pub async fn set_person_enabled(
    client: &Client,
    base_url: &str,
    person_id: &str,
    enabled: bool,
    metrics: Option<&MetricsCollector>,
) -> Result<MessageResponse> {
    let url = format!("{base_url}{SET_PERSON_ENABLED}");
    let body = SetPersonEnabledRequest {
        person_id: person_id.to_string(),
        enabled,
    };
    let builder = client.post(&url).json(&body);
    let response = send_request(builder, &url, SET_PERSON_ENABLED, "POST", metrics).await?;
    read_json(response, SET_PERSON_ENABLED, metrics).await
}
