//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Support loading from a config file, environment variables, and direct builder methods.
//! - Validate and build the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Each source overwrites the values set by the sources applied before it, so
//!   the usual chain is file, then env, then explicit `with_*` overrides.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use std::time::Duration;

use super::env::{apply_env, config_path_from_env};
use super::error::ConfigError;
use super::file::apply_file;
use crate::constants::{MAX_LOG_WINDOW_MINUTES, MAX_TIMEOUT_SECS};
use crate::paths::default_config_path;
use crate::types::{Config, ConnectionConfig, SearchConfig};

/// Configuration loader that builds config from files, env vars and overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    timeout_secs: Option<u64>,
    default_bucket: Option<String>,
    preview_extensions: Option<Vec<String>>,
    rows_per_chunk: Option<u64>,
    download_dir: Option<PathBuf>,
    log_window_minutes: Option<u64>,
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` for invalid syntax and
    /// `ConfigError::DotenvIo` when the file exists but cannot be read.
    /// Missing `.env` files are silently ignored.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the JSON config file.
    ///
    /// The path is, in order: `with_config_path`, `OPSDASH_CONFIG_PATH`, then
    /// the platform default. A missing file is skipped.
    pub fn from_config_file(mut self) -> Result<Self, ConfigError> {
        let path = self
            .config_path
            .clone()
            .or_else(config_path_from_env)
            .or_else(default_config_path);

        if let Some(path) = path {
            apply_file(&mut self, &path)?;
        }
        Ok(self)
    }

    /// Read configuration from `OPSDASH_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: String) -> Self {
        self.set_base_url(url);
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.set_timeout_secs(timeout.as_secs());
        self
    }

    /// Set the default S3 bucket.
    pub fn with_default_bucket(mut self, bucket: String) -> Self {
        self.set_default_bucket(bucket);
        self
    }

    /// Set the previewable extensions.
    pub fn with_preview_extensions(mut self, extensions: Vec<String>) -> Self {
        self.set_preview_extensions(extensions);
        self
    }

    /// Set the default rows per CSV chunk.
    pub fn with_rows_per_chunk(mut self, rows: u64) -> Self {
        self.set_rows_per_chunk(rows);
        self
    }

    /// Set the download directory.
    pub fn with_download_dir(mut self, dir: PathBuf) -> Self {
        self.set_download_dir(dir);
        self
    }

    pub(crate) fn set_base_url(&mut self, url: String) {
        self.base_url = Some(url);
    }

    pub(crate) fn set_timeout_secs(&mut self, secs: u64) {
        self.timeout_secs = Some(secs);
    }

    pub(crate) fn set_default_bucket(&mut self, bucket: String) {
        self.default_bucket = Some(bucket);
    }

    pub(crate) fn set_preview_extensions(&mut self, extensions: Vec<String>) {
        self.preview_extensions = Some(extensions);
    }

    pub(crate) fn set_rows_per_chunk(&mut self, rows: u64) {
        self.rows_per_chunk = Some(rows);
    }

    pub(crate) fn set_download_dir(&mut self, dir: PathBuf) {
        self.download_dir = Some(dir);
    }

    pub(crate) fn set_log_window_minutes(&mut self, minutes: u64) {
        self.log_window_minutes = Some(minutes);
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut config = Config::default();

        if let Some(raw) = self.base_url.as_deref() {
            config.connection = ConnectionConfig {
                base_url: validate_and_normalize_base_url(raw)?,
                ..config.connection
            };
        }

        if let Some(secs) = self.timeout_secs {
            if secs == 0 || secs > MAX_TIMEOUT_SECS {
                return Err(ConfigError::InvalidValue {
                    var: "timeout_secs".into(),
                    message: format!("must be between 1 and {MAX_TIMEOUT_SECS} seconds"),
                });
            }
            config.connection.timeout = Some(Duration::from_secs(secs));
        }

        if let Some(bucket) = self.default_bucket {
            let bucket = bucket.trim();
            if bucket.is_empty() {
                return Err(ConfigError::InvalidValue {
                    var: "s3_bucket".into(),
                    message: "must not be blank".into(),
                });
            }
            config.browse.default_bucket = bucket.to_string();
        }

        if let Some(exts) = self.preview_extensions {
            let normalized = normalize_extensions(&exts);
            if !normalized.is_empty() {
                config.browse.preview_extensions = normalized;
            }
        }

        if let Some(rows) = self.rows_per_chunk {
            if rows == 0 {
                return Err(ConfigError::InvalidValue {
                    var: "rows_per_chunk".into(),
                    message: "must be at least 1".into(),
                });
            }
            config.batch.default_rows_per_chunk = rows;
        }

        if let Some(dir) = self.download_dir {
            config.batch.download_dir = dir;
        }

        if let Some(minutes) = self.log_window_minutes {
            if minutes == 0 || minutes > MAX_LOG_WINDOW_MINUTES {
                return Err(ConfigError::InvalidValue {
                    var: "log_window_minutes".into(),
                    message: format!("must be between 1 and {MAX_LOG_WINDOW_MINUTES}"),
                });
            }
            config.search = SearchConfig {
                window: Duration::from_secs(minutes * 60),
            };
        }

        Ok(config)
    }
}

/// Lowercase, strip leading dots, drop blanks and duplicates.
fn normalize_extensions(raw: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for ext in raw {
        let ext = ext.trim().trim_start_matches('.').to_ascii_lowercase();
        if !ext.is_empty() && !out.contains(&ext) {
            out.push(ext);
        }
    }
    out
}

fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    let parsed = url::Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
        url: trimmed.to_string(),
        message: format!("must be an absolute http(s) URL (e.g. http://localhost:8000): {e}"),
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::InvalidUrl {
            url: trimmed.to_string(),
            message: format!("scheme must be http or https, got: {scheme}"),
        });
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::InvalidUrl {
            url: trimmed.to_string(),
            message: "host is required".into(),
        });
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            validate_and_normalize_base_url(" http://localhost:8000/ ").unwrap(),
            "http://localhost:8000"
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let err = validate_and_normalize_base_url("ftp://example.com").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { .. }));
    }

    #[test]
    fn test_rejects_relative_url() {
        assert!(validate_and_normalize_base_url("localhost:8000/api").is_err());
    }

    #[test]
    fn test_normalize_extensions() {
        let exts = vec![".PNG".into(), " jpg ".into(), "".into(), "png".into()];
        assert_eq!(normalize_extensions(&exts), vec!["png", "jpg"]);
    }
}
