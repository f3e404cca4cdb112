//! Configuration management for the opsdash dashboard.
//!
//! This crate provides types and loaders for the backend connection and the
//! per-view defaults (bucket, preview extensions, chunk size, download
//! directory, log search window) from `.env`, environment variables and an
//! optional JSON config file.

pub mod constants;
mod loader;
mod paths;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use paths::{default_config_path, default_download_dir};
pub use types::{BatchConfig, BrowseConfig, Config, ConnectionConfig, SearchConfig};

#[cfg(test)]
pub(crate) mod test_util {
    use std::sync::{Mutex, OnceLock};

    pub fn global_test_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }
}
