//! JSON config file loading.
//!
//! Responsibilities:
//! - Read the optional config file and apply its values to a ConfigLoader.
//!
//! Invariants:
//! - A missing file is not an error; every key in the file is optional.
//! - File values are applied before environment variables.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::builder::ConfigLoader;
use super::error::ConfigError;

/// On-disk shape of `config.json`.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct FileConfig {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub s3_bucket: Option<String>,
    pub preview_extensions: Option<Vec<String>>,
    pub rows_per_chunk: Option<u64>,
    pub download_dir: Option<PathBuf>,
    pub log_window_minutes: Option<u64>,
}

fn read_file_config(path: &Path) -> Result<Option<FileConfig>, ConfigError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(ConfigError::ConfigFileRead {
                path: path.to_path_buf(),
                kind: e.kind(),
            });
        }
    };

    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Apply values from the config file at `path` to the loader.
pub fn apply_file(loader: &mut ConfigLoader, path: &Path) -> Result<(), ConfigError> {
    let Some(file) = read_file_config(path)? else {
        tracing::debug!(path = %path.display(), "No config file found");
        return Ok(());
    };

    tracing::debug!(path = %path.display(), "Applying config file");

    if let Some(url) = file.base_url {
        loader.set_base_url(url);
    }
    if let Some(secs) = file.timeout_secs {
        loader.set_timeout_secs(secs);
    }
    if let Some(bucket) = file.s3_bucket {
        loader.set_default_bucket(bucket);
    }
    if let Some(exts) = file.preview_extensions {
        loader.set_preview_extensions(exts);
    }
    if let Some(rows) = file.rows_per_chunk {
        loader.set_rows_per_chunk(rows);
    }
    if let Some(dir) = file.download_dir {
        loader.set_download_dir(dir);
    }
    if let Some(minutes) = file.log_window_minutes {
        loader.set_log_window_minutes(minutes);
    }
    Ok(())
}
