//! Per-tab view state machines.
//!
//! Responsibilities:
//! - Own each tab's form fields, focus and remote resources.
//! - Turn key presses into command actions (with fresh tickets) and apply
//!   the matching results.
//!
//! Does NOT handle:
//! - Popups, status line or confirmation policy (see `App`).
//! - Rendering (see `ui::screens`).
//! - Network access (see `runtime::side_effects`).
//!
//! Invariants:
//! - A view never blocks: every method returns an [`Outcome`] immediately.
//! - Results whose ticket the view is not waiting on are reported as stale
//!   and leave the view untouched.

pub mod batch;
pub mod browser;
pub mod device;
pub mod labels;
pub mod logs;
pub mod person;
pub mod shadow;
pub mod tools;

pub use batch::{BatchFocus, BatchView, Inspection};
pub use browser::{BrowserFocus, BrowserView, Preview, breadcrumb_prefix, breadcrumbs};
pub use device::{DeviceFocus, DeviceView};
pub use labels::{LabelsFocus, LabelsView};
pub use logs::{LogsFocus, LogsView};
pub use person::{PersonFocus, PersonView};
pub use shadow::{FieldKind, SHADOW_FIELDS, ShadowEditor, ShadowField};
pub use tools::ToolsView;

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::confirm::ConfirmRequest;
use crate::validation::ValidationError;

/// Something the view wants the user to know.
#[derive(Debug, Clone, PartialEq)]
pub enum Notice {
    Info(String),
    /// A submit was blocked before any request went out.
    Invalid(ValidationError),
    /// A mutation failed; shown as an error popup.
    Failure(String),
}

/// What a view asks the app to do after handling an event.
#[derive(Debug, Default)]
pub struct Outcome {
    pub command: Option<Action>,
    pub confirm: Option<ConfirmRequest>,
    pub notice: Option<Notice>,
    /// Set when a result arrived for a request the view no longer awaits.
    pub stale: Option<&'static str>,
}

impl Outcome {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn command(action: Action) -> Self {
        Self {
            command: Some(action),
            ..Self::default()
        }
    }

    pub fn confirm(request: ConfirmRequest) -> Self {
        Self {
            confirm: Some(request),
            ..Self::default()
        }
    }

    pub fn invalid(error: ValidationError) -> Self {
        Self {
            notice: Some(Notice::Invalid(error)),
            ..Self::default()
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            notice: Some(Notice::Info(message.into())),
            ..Self::default()
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            notice: Some(Notice::Failure(message.into())),
            ..Self::default()
        }
    }

    pub fn stale(view: &'static str) -> Self {
        Self {
            stale: Some(view),
            ..Self::default()
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}

/// Move a focus index by one step for Up/Down, wrapping around.
pub(crate) fn step_focus(current: usize, count: usize, key: &KeyEvent) -> Option<usize> {
    if count == 0 {
        return None;
    }
    match key.code {
        KeyCode::Down => Some((current + 1) % count),
        KeyCode::Up => Some((current + count - 1) % count),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn test_step_focus_wraps() {
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        let up = KeyEvent::new(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(step_focus(2, 3, &down), Some(0));
        assert_eq!(step_focus(0, 3, &up), Some(2));
        assert_eq!(step_focus(0, 0, &down), None);
    }
}
