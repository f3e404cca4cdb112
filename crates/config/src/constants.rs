//! Centralized constants for the opsdash workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection Defaults
// =============================================================================

/// Default backend API gateway.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

// =============================================================================
// View Defaults
// =============================================================================

/// Bucket the S3 viewer connects to when no bucket is typed.
pub const DEFAULT_S3_BUCKET: &str = "pat-labels";

/// File extensions the S3 viewer previews.
pub const DEFAULT_PREVIEW_EXTENSIONS: &[&str] = &["png"];

/// Default number of CSV rows per split chunk.
pub const DEFAULT_ROWS_PER_CHUNK: u64 = 100_000;

/// Fallback archive name when the split response carries no usable filename.
pub const DEFAULT_SPLIT_ARCHIVE_NAME: &str = "split_chunks.zip";

/// Default log search window, counted back from now.
pub const DEFAULT_LOG_WINDOW_MINUTES: u64 = 60;

/// Upper bound for the log search window (7 days).
pub const MAX_LOG_WINDOW_MINUTES: u64 = 7 * 24 * 60;

// =============================================================================
// TUI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
pub const DEFAULT_UI_TICK_MS: u64 = 250;

/// Seconds to wait for in-flight tasks on shutdown.
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 3;

// =============================================================================
// Environment Variable Names
// =============================================================================

pub const ENV_BASE_URL: &str = "OPSDASH_BASE_URL";
pub const ENV_TIMEOUT_SECS: &str = "OPSDASH_TIMEOUT_SECS";
pub const ENV_S3_BUCKET: &str = "OPSDASH_S3_BUCKET";
pub const ENV_PREVIEW_EXTENSIONS: &str = "OPSDASH_PREVIEW_EXTENSIONS";
pub const ENV_ROWS_PER_CHUNK: &str = "OPSDASH_ROWS_PER_CHUNK";
pub const ENV_DOWNLOAD_DIR: &str = "OPSDASH_DOWNLOAD_DIR";
pub const ENV_LOG_WINDOW_MINUTES: &str = "OPSDASH_LOG_WINDOW_MINUTES";
pub const ENV_CONFIG_PATH: &str = "OPSDASH_CONFIG_PATH";
