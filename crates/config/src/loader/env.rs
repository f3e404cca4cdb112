//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `OPSDASH_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed.
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::path::PathBuf;
use std::str::FromStr;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_BASE_URL, ENV_CONFIG_PATH, ENV_DOWNLOAD_DIR, ENV_LOG_WINDOW_MINUTES,
    ENV_PREVIEW_EXTENSIONS, ENV_ROWS_PER_CHUNK, ENV_S3_BUCKET, ENV_TIMEOUT_SECS,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: FromStr>(var: &str, expected: &str) -> Result<Option<T>, ConfigError> {
    env_var_or_none(var)
        .map(|raw| {
            raw.parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: format!("must be {expected}, got '{raw}'"),
            })
        })
        .transpose()
}

/// Split a comma-separated extension list.
pub(crate) fn split_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// The config file path named by `OPSDASH_CONFIG_PATH`, if any.
pub(crate) fn config_path_from_env() -> Option<PathBuf> {
    env_var_or_none(ENV_CONFIG_PATH).map(PathBuf::from)
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(url);
    }
    if let Some(secs) = parse_env::<u64>(ENV_TIMEOUT_SECS, "a whole number of seconds")? {
        loader.set_timeout_secs(secs);
    }
    if let Some(bucket) = env_var_or_none(ENV_S3_BUCKET) {
        loader.set_default_bucket(bucket);
    }
    if let Some(raw) = env_var_or_none(ENV_PREVIEW_EXTENSIONS) {
        loader.set_preview_extensions(split_extensions(&raw));
    }
    if let Some(rows) = parse_env::<u64>(ENV_ROWS_PER_CHUNK, "a positive integer")? {
        loader.set_rows_per_chunk(rows);
    }
    if let Some(dir) = env_var_or_none(ENV_DOWNLOAD_DIR) {
        loader.set_download_dir(PathBuf::from(dir));
    }
    if let Some(minutes) = parse_env::<u64>(ENV_LOG_WINDOW_MINUTES, "a whole number of minutes")? {
        loader.set_log_window_minutes(minutes);
    }
    Ok(())
}
