//! opsdash TUI library
//!
//! Application state, input handling, rendering and the async runtime for
//! the operations dashboard.
//!
//! # Example
//!
//! ```rust
//! use opsdash_tui::{Action, App};
//! use crossterm::event::{KeyCode, KeyEvent};
//!
//! let app = App::new(opsdash_config::Config::default());
//! let action = app.handle_input(KeyEvent::from(KeyCode::Char('q')));
//! assert!(matches!(action, Some(Action::Quit)));
//! ```

pub mod action;
pub mod app;
pub mod artifacts;
pub mod cli;
pub mod confirm;
pub mod resource;
pub mod runtime;
pub mod ui;
pub mod validation;

pub use action::Action;
pub use app::{App, CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use ui::popup::{Popup, PopupType};
pub use ui::status::{StatusLevel, StatusMessage};
