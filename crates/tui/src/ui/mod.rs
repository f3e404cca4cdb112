//! UI rendering modules for the TUI.
//!
//! This module contains screen-specific rendering logic that is separated
//! from the main app state management.

pub mod popup;
pub mod screens;
pub mod status;
pub mod theme;
pub mod widgets;

pub use popup::{Popup, PopupType, render_popup};
pub use status::{StatusLevel, StatusMessage};
pub use theme::Theme;
