//! Error types for the opsdash API client.
//!
//! Invariants:
//! - `Transport` means no HTTP response arrived at all.
//! - `Remote` always carries the best message the backend offered: the
//!   `detail` field when present, otherwise the status reason phrase.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during API client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (refused, DNS, timeout, reset).
    #[error("Could not reach the backend at {url}: {message}. Is the backend running?")]
    Transport { url: String, message: String },

    /// The backend answered with a non-2xx status.
    #[error("API error ({status}) at {url}: {message}")]
    Remote {
        status: u16,
        url: String,
        message: String,
    },

    /// A 2xx response whose body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Local file access failed (e.g. reading a CSV before upload).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),
}

impl ClientError {
    /// Build a transport error from a reqwest failure that produced no response.
    pub(crate) fn transport(url: &str, error: &reqwest::Error) -> Self {
        let message = if error.is_timeout() {
            "request timed out".to_string()
        } else if error.is_connect() {
            "connection failed".to_string()
        } else {
            error.to_string()
        };
        Self::Transport {
            url: url.to_string(),
            message,
        }
    }

    /// The HTTP status, when the backend answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the failure happened before any response arrived.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Text suitable for showing to the user.
    ///
    /// Remote errors show the backend message verbatim; everything else uses
    /// the `Display` form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Remote { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}
