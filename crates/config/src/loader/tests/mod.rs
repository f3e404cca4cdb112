//! Tests for the configuration loader builder.
//!
//! Invariants:
//! - Tests use `serial_test` and `env_lock()` to prevent environment variable pollution.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;

mod dotenv_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Every `OPSDASH_*` variable unset, for `temp_env::with_vars`.
pub fn cleared_env() -> Vec<(&'static str, Option<&'static str>)> {
    use crate::constants::*;
    vec![
        (ENV_BASE_URL, None),
        (ENV_TIMEOUT_SECS, None),
        (ENV_S3_BUCKET, None),
        (ENV_PREVIEW_EXTENSIONS, None),
        (ENV_ROWS_PER_CHUNK, None),
        (ENV_DOWNLOAD_DIR, None),
        (ENV_LOG_WINDOW_MINUTES, None),
        (ENV_CONFIG_PATH, None),
    ]
}
