//! Side effect handlers for async API calls and file work in the TUI.
//!
//! Responsibilities:
//! - Turn command actions into backend calls or local file work.
//! - Send every answer back through the action channel with the ticket it was issued for.
//!
//! Does NOT handle:
//! - State changes (the app applies result actions in `App::update`).
//! - Deciding whether a result is stale (tickets are checked by the views).
//!
//! Invariants:
//! - Every handler spawns onto the shared `TaskTracker` and returns immediately.
//! - A handler never drops a command silently: it always sends a result action.

mod batch;
mod device;
mod dispatcher;
mod files;
mod logs;
mod person;
mod reports;
mod s3;
mod types;

pub use dispatcher::handle_side_effects;
pub use tokio_util::task::TaskTracker;
pub use types::SharedClient;
