//! Mouse event handling.
//!
//! Only the scroll wheel is used; it behaves like the arrow keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use crate::action::Action;
use crate::app::App;

impl App {
    /// Map a mouse event to the key it stands for.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        if self.popup.is_some() {
            return None;
        }
        let code = match mouse.kind {
            MouseEventKind::ScrollUp => KeyCode::Up,
            MouseEventKind::ScrollDown => KeyCode::Down,
            _ => return None,
        };
        Some(Action::Input(KeyEvent::new(code, KeyModifiers::NONE)))
    }
}
