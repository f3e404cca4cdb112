//! Runtime components for the TUI application.
//!
//! This module contains the runtime infrastructure for the TUI:
//! - Terminal management (TerminalGuard)
//! - Client creation
//! - Configuration loading
//! - Async side effect handlers for API calls and file work
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `opsdash_tui::app` and `opsdash_tui::ui`).
//! - Backend request details (see `opsdash_client`).
//!
//! Invariants:
//! - Side effects run in separate tokio tasks to avoid blocking the UI.

pub mod client;
pub mod config;
pub mod side_effects;
pub mod terminal;
