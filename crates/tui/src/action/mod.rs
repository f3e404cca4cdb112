//! Action protocol for async TUI event handling.
//!
//! Actions represent user input, commands for the runtime, and the results
//! those commands produce.
//!
//! # Module Structure
//!
//! - `variants`: the `Action` enum and payload types
//! - `redaction`: `RedactedAction`, the only way actions should be logged
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (see `App::update`)
//! - Async task execution (see `runtime::side_effects`)

pub mod redaction;
pub mod variants;

pub use redaction::RedactedAction;
pub use variants::{Action, ApiResult, SaveOrigin, SplitOutcome};
