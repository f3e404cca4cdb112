//! CSV split endpoint.
//!
//! The response is a binary zip whose name comes from `Content-Disposition`.
//! The backend sends the unquoted form (`attachment; filename=x_split_chunks.zip`),
//! so quoted, unquoted and RFC 5987 (`filename*=UTF-8''...`) forms are all accepted.

use std::num::NonZeroU64;

use percent_encoding::percent_decode_str;
use reqwest::Client;
use reqwest::header::CONTENT_DISPOSITION;
use reqwest::multipart::{Form, Part};
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{SplitArchive, safe_file_name};
use opsdash_config::constants::DEFAULT_SPLIT_ARCHIVE_NAME;

const SPLIT: &str = "/api/csvsplitter/split";

/// Upload a CSV and receive a zip of zipped chunks.
///
/// `rows_per_chunk` is non-zero by type; the backend rejects anything below 1.
pub async fn split_csv(
    client: &Client,
    base_url: &str,
    file_name: &str,
    contents: Vec<u8>,
    rows_per_chunk: NonZeroU64,
    metrics: Option<&MetricsCollector>,
) -> Result<SplitArchive> {
    let url = format!("{base_url}{SPLIT}");
    let part = Part::bytes(contents).file_name(file_name.to_string());
    let form = Form::new().part("file", part);

    let builder = client
        .post(&url)
        .query(&[("rows_per_chunk", rows_per_chunk.get())])
        .multipart(form);
    let response = send_request(builder, &url, SPLIT, "POST", metrics).await?;

    let suggested = response
        .headers()
        .get(CONTENT_DISPOSITION)
        .and_then(|v| v.to_str().ok())
        .and_then(filename_from_content_disposition);
    if suggested.is_none() {
        debug!("No usable filename in split response, using default");
    }

    let bytes = response
        .bytes()
        .await
        .map_err(|e| ClientError::transport(&url, &e))?;

    Ok(SplitArchive {
        file_name: suggested.unwrap_or_else(|| DEFAULT_SPLIT_ARCHIVE_NAME.to_string()),
        bytes: bytes.to_vec(),
    })
}

/// Extract a safe basename from a `Content-Disposition` header value.
///
/// `filename*` wins over `filename` when both are present. Directory parts
/// are stripped, and empty or dot-only names yield `None`.
pub fn filename_from_content_disposition(header: &str) -> Option<String> {
    let mut plain = None;
    let mut extended = None;

    for param in split_params(header) {
        let Some((name, value)) = param.split_once('=') else {
            continue;
        };
        let name = name.trim().to_ascii_lowercase();
        let value = value.trim();
        match name.as_str() {
            "filename*" => extended = decode_ext_value(value),
            "filename" => plain = Some(unquote(value)),
            _ => {}
        }
    }

    extended.or(plain).and_then(|name| safe_file_name(&name))
}

/// Split on `;` outside double quotes.
fn split_params(header: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut in_quotes = false;
    let mut escaped = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ';' if !in_quotes => {
                parts.push(header[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(header[start..].trim());
    parts
}

fn unquote(value: &str) -> String {
    match value.strip_prefix('"').and_then(|v| v.strip_suffix('"')) {
        Some(inner) => {
            let mut out = String::with_capacity(inner.len());
            let mut chars = inner.chars();
            while let Some(c) = chars.next() {
                if c == '\\' {
                    if let Some(next) = chars.next() {
                        out.push(next);
                    }
                } else {
                    out.push(c);
                }
            }
            out
        }
        None => value.to_string(),
    }
}

/// Decode `charset'lang'percent-encoded` (RFC 5987).
fn decode_ext_value(value: &str) -> Option<String> {
    let mut pieces = value.splitn(3, '\'');
    let charset = pieces.next()?;
    let _lang = pieces.next()?;
    let encoded = pieces.next()?;
    let decoded = percent_decode_str(encoded);
    if charset.eq_ignore_ascii_case("utf-8") {
        decoded.decode_utf8().ok().map(|s| s.into_owned())
    } else {
        Some(decoded.decode_utf8_lossy().into_owned())
    }
}
