//! Configuration types for opsdash.
//!
//! Responsibilities:
//! - Define connection settings for the backend API gateway.
//! - Define per-view defaults (browse, batch, search).
//!
//! Does NOT handle:
//! - Loading from `.env`, env vars or files (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `Config::default()` points at the local gateway with the built-in view defaults.
//! - `BrowseConfig::preview_extensions` is lowercase with no leading dots.

use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_LOG_WINDOW_MINUTES, DEFAULT_PREVIEW_EXTENSIONS,
    DEFAULT_ROWS_PER_CHUNK, DEFAULT_S3_BUCKET,
};
use crate::paths::default_download_dir;

/// Connection settings for the backend API gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    /// Base URL without a trailing slash (e.g. `http://localhost:8000`).
    pub base_url: String,
    /// Request timeout. `None` keeps the transport default.
    pub timeout: Option<Duration>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
        }
    }
}

/// Defaults for the S3 viewer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrowseConfig {
    pub default_bucket: String,
    pub preview_extensions: Vec<String>,
}

impl BrowseConfig {
    /// Whether an object key has one of the previewable extensions.
    ///
    /// Matching is case-insensitive on the text after the last `.` of the
    /// final path segment.
    pub fn is_previewable(&self, key: &str) -> bool {
        let name = key.rsplit('/').next().unwrap_or(key);
        match name.rsplit_once('.') {
            Some((stem, ext)) if !stem.is_empty() => {
                let ext = ext.to_ascii_lowercase();
                self.preview_extensions.iter().any(|e| *e == ext)
            }
            _ => false,
        }
    }
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            default_bucket: DEFAULT_S3_BUCKET.to_string(),
            preview_extensions: DEFAULT_PREVIEW_EXTENSIONS
                .iter()
                .map(|e| e.to_string())
                .collect(),
        }
    }
}

/// Defaults for the CSV splitter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchConfig {
    pub default_rows_per_chunk: u64,
    /// Where split archives and saved previews are written.
    pub download_dir: PathBuf,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            default_rows_per_chunk: DEFAULT_ROWS_PER_CHUNK,
            download_dir: default_download_dir(),
        }
    }
}

/// Defaults for the log search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    pub window: Duration,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            window: Duration::from_secs(DEFAULT_LOG_WINDOW_MINUTES * 60),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub browse: BrowseConfig,
    pub batch: BatchConfig,
    pub search: SearchConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_local_gateway() {
        let config = Config::default();
        assert_eq!(config.connection.base_url, "http://localhost:8000");
        assert!(config.connection.timeout.is_none());
        assert_eq!(config.browse.default_bucket, "pat-labels");
        assert_eq!(config.batch.default_rows_per_chunk, 100_000);
        assert_eq!(config.search.window, Duration::from_secs(3600));
    }

    #[test]
    fn test_is_previewable_matches_extension_case_insensitively() {
        let browse = BrowseConfig::default();
        assert!(browse.is_previewable("labels/2024/a.png"));
        assert!(browse.is_previewable("labels/2024/A.PNG"));
        assert!(!browse.is_previewable("labels/2024/a.pdf"));
        assert!(!browse.is_previewable("labels/png/readme"));
        assert!(!browse.is_previewable("labels/.png"));
    }

    #[test]
    fn test_is_previewable_uses_configured_extensions() {
        let browse = BrowseConfig {
            default_bucket: "b".into(),
            preview_extensions: vec!["jpg".into(), "pdf".into()],
        };
        assert!(browse.is_previewable("x/y.pdf"));
        assert!(!browse.is_previewable("x/y.png"));
    }
}
