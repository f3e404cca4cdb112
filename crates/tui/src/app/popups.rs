//! Popup input handling.
//!
//! Responsibilities:
//! - Close help and error popups
//! - Turn y/n on a confirm popup into an approved or declined request
//!
//! Does NOT handle:
//! - Rendering popups (see `ui::popup`)

use crossterm::event::{KeyCode, KeyEvent};

use crate::action::Action;
use crate::app::App;
use crate::ui::PopupType;

impl App {
    pub(crate) fn handle_popup_input(&mut self, key: KeyEvent) -> Option<Action> {
        let kind = self.popup.as_ref().map(|p| p.kind.clone())?;
        match kind {
            PopupType::Help => {
                if matches!(
                    key.code,
                    KeyCode::Esc | KeyCode::Enter | KeyCode::Char('?') | KeyCode::Char('q')
                ) {
                    self.popup = None;
                }
                None
            }
            PopupType::Error => {
                self.popup = None;
                None
            }
            PopupType::Confirm(request) => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.popup = None;
                    self.resolve_confirmation(request, true)
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.popup = None;
                    self.resolve_confirmation(request, false)
                }
                _ => None,
            },
        }
    }
}
