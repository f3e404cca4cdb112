//! Uniform request execution and error mapping.
//!
//! Every endpoint sends through [`send_request`], so all of them map
//! failures the same way:
//! - no response at all becomes [`ClientError::Transport`];
//! - a non-2xx status becomes [`ClientError::Remote`] with the body's
//!   `detail` field, else the status reason phrase;
//! - a 2xx body that does not parse becomes [`ClientError::InvalidResponse`].
//!
//! Requests are single-shot; nothing here retries.

use std::time::Instant;

use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;

/// Send a request and return the response only if it has a 2xx status.
pub async fn send_request(
    builder: RequestBuilder,
    url: &str,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let start = Instant::now();
    let outcome = match builder.send().await {
        Ok(response) if response.status().is_success() => Ok(response),
        Ok(response) => Err(remote_error(response).await),
        Err(e) => Err(ClientError::transport(url, &e)),
    };
    let elapsed = start.elapsed();

    let status = match &outcome {
        Ok(response) => Some(response.status().as_u16()),
        Err(e) => e.status(),
    };
    debug!(method, endpoint, ?status, elapsed_ms = elapsed.as_millis() as u64, "Request finished");

    if let Some(m) = metrics {
        m.record_request_duration(endpoint, method, elapsed, status);
        if let Err(e) = &outcome {
            m.record_client_error(endpoint, method, e);
        }
    }

    outcome
}

/// Read a 2xx body and deserialize it as `T`.
pub async fn read_json<T: DeserializeOwned>(
    response: Response,
    endpoint: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<T> {
    let url = response.url().to_string();
    let bytes = response
        .bytes()
        .await
        .map_err(|e| ClientError::transport(&url, &e))?;

    serde_json::from_slice(&bytes).map_err(|e| {
        if let Some(m) = metrics {
            m.record_deserialization_failure(endpoint, std::any::type_name::<T>());
        }
        ClientError::InvalidResponse(format!("{endpoint}: {e}"))
    })
}

async fn remote_error(response: Response) -> ClientError {
    let status = response.status();
    let url = response.url().to_string();
    // Blob endpoints label their JSON error bodies as binary, so the body is
    // parsed whatever the content type says.
    let body = response.bytes().await.unwrap_or_default();

    ClientError::Remote {
        status: status.as_u16(),
        url,
        message: remote_message(status, &body),
    }
}

/// Best-effort message for a non-2xx response body.
pub fn remote_message(status: StatusCode, body: &[u8]) -> String {
    extract_detail(body).unwrap_or_else(|| {
        status
            .canonical_reason()
            .map(str::to_string)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
    })
}

/// The `detail` field of a JSON error body.
///
/// Non-string details (e.g. validation error lists) are returned as compact JSON.
fn extract_detail(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    match value.get("detail")? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
