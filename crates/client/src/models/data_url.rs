//! Data URL decoding (`data:image/png;base64,...`).

use base64::Engine;
use base64::engine::general_purpose;
use thiserror::Error;

/// Bytes carried by a data URL together with its declared media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedContent {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DataUrlError {
    #[error("content is not a data URL")]
    MissingScheme,

    #[error("data URL has no ',' separating header and payload")]
    MissingPayload,

    #[error("only base64 data URLs are supported")]
    NotBase64,

    #[error("invalid base64 payload: {0}")]
    InvalidBase64(String),
}

/// Parse and decode a base64 data URL.
///
/// Whitespace inside the payload is ignored. An empty media type defaults to
/// `text/plain` as data URLs specify.
pub fn parse_data_url(raw: &str) -> Result<DecodedContent, DataUrlError> {
    let rest = raw
        .trim()
        .strip_prefix("data:")
        .ok_or(DataUrlError::MissingScheme)?;
    let (header, payload) = rest.split_once(',').ok_or(DataUrlError::MissingPayload)?;

    let mut params = header.split(';');
    let media_type = params.next().unwrap_or_default().trim();
    if !params.any(|p| p.trim().eq_ignore_ascii_case("base64")) {
        return Err(DataUrlError::NotBase64);
    }

    let compact: String = payload.chars().filter(|c| !c.is_whitespace()).collect();
    let bytes = general_purpose::STANDARD
        .decode(compact.as_bytes())
        .map_err(|e| DataUrlError::InvalidBase64(e.to_string()))?;

    Ok(DecodedContent {
        media_type: if media_type.is_empty() {
            "text/plain".to_string()
        } else {
            media_type.to_ascii_lowercase()
        },
        bytes,
    })
}
