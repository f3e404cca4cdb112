//! Keyboard routing and input components.
//!
//! Responsibilities:
//! - Map global keys (quit, tabs, help) to actions
//! - Hand everything else to the active view or popup as `Action::Input`
//!
//! Non-responsibilities:
//! - Does NOT mutate app state (see `App::update`)

pub mod components;

pub use components::SingleLineInput;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::app::state::CurrentScreen;

impl App {
    /// Translate a key press into an action.
    ///
    /// Ctrl+C always quits. While a popup is open every other key goes to it.
    /// Single-character shortcuts only apply when no text field has focus.
    pub fn handle_input(&self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }
        if self.popup.is_some() {
            return Some(Action::Input(key));
        }

        match key.code {
            KeyCode::Tab => return Some(Action::NextScreen),
            KeyCode::BackTab => return Some(Action::PreviousScreen),
            _ => {}
        }

        if !self.captures_text()
            && let KeyCode::Char(c) = key.code
        {
            match c {
                'q' => return Some(Action::Quit),
                '?' => return Some(Action::OpenHelp),
                _ => {
                    if let Some(screen) = CurrentScreen::from_digit(c) {
                        return Some(Action::SwitchTo(screen));
                    }
                }
            }
        }

        Some(Action::Input(key))
    }
}
