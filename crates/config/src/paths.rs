//! Path helpers for configuration and download locations.
//!
//! Responsibilities:
//! - Determine the platform config file path via `directories`.
//! - Determine where saved archives and previews are written by default.
//!
//! Does NOT handle:
//! - File I/O operations.

use std::path::PathBuf;

/// Returns the default path to the configuration file.
///
/// - Linux: `~/.config/opsdash/config.json`
/// - macOS: `~/Library/Application Support/opsdash/config.json`
/// - Windows: `%AppData%\opsdash\config.json`
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "opsdash")
        .map(|dirs| dirs.config_dir().join("config.json"))
}

/// Returns the user's download directory, or the working directory when the
/// platform does not define one.
pub fn default_download_dir() -> PathBuf {
    directories::UserDirs::new()
        .and_then(|dirs| dirs.download_dir().map(|p| p.to_path_buf()))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_ends_with_app_segment() {
        if let Some(path) = default_config_path() {
            assert!(path.ends_with(std::path::Path::new("opsdash").join("config.json")));
        }
    }

    #[test]
    fn test_default_download_dir_is_never_empty() {
        assert!(!default_download_dir().as_os_str().is_empty());
    }
}
