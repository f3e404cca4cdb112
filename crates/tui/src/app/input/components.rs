//! Single-line text field built on `tui-input`.
//!
//! Provides cursor-aware editing, word navigation and placeholder text for
//! every form field in the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tui_input::{Input, InputRequest};

use crate::ui::theme::Theme;

/// Single-line input wrapper.
#[derive(Debug, Clone, Default)]
pub struct SingleLineInput {
    input: Input,
    placeholder: Option<String>,
}

impl SingleLineInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new input with the given value.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            input: Input::new(value.into()),
            placeholder: None,
        }
    }

    /// Create a new input with a placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            placeholder: Some(placeholder.into()),
        }
    }

    /// Handle an editing key. Returns `true` if the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        let before = self.input.value().to_string();

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let req = match key.code {
                KeyCode::Left => Some(InputRequest::GoToPrevWord),
                KeyCode::Right => Some(InputRequest::GoToNextWord),
                // Ctrl+U clears the line
                KeyCode::Char('u') => Some(InputRequest::DeleteLine),
                KeyCode::Char('w') => Some(InputRequest::DeletePrevWord),
                KeyCode::Char('a') => Some(InputRequest::GoToStart),
                KeyCode::Char('e') => Some(InputRequest::GoToEnd),
                _ => None,
            };
            if let Some(r) = req {
                self.input.handle(r);
            }
            return self.input.value() != before;
        }

        let req = match key.code {
            KeyCode::Char(c) => Some(InputRequest::InsertChar(c)),
            KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
            KeyCode::Delete => Some(InputRequest::DeleteNextChar),
            KeyCode::Left => Some(InputRequest::GoToPrevChar),
            KeyCode::Right => Some(InputRequest::GoToNextChar),
            KeyCode::Home => Some(InputRequest::GoToStart),
            KeyCode::End => Some(InputRequest::GoToEnd),
            _ => None,
        };

        if let Some(r) = req {
            self.input.handle(r);
        }
        self.input.value() != before
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Set value programmatically; the cursor moves to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.input.cursor()
    }

    pub fn clear(&mut self) {
        self.input.handle(InputRequest::DeleteLine);
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }

    /// Draw the field in a bordered box; the terminal cursor is placed when focused.
    pub fn render(&self, f: &mut Frame, area: Rect, title: &str, focused: bool, theme: &Theme) {
        let width = area.width.saturating_sub(2) as usize;
        let scroll = self.input.visual_scroll(width);

        let content = match (self.is_empty(), self.placeholder()) {
            (true, Some(placeholder)) if !focused => {
                Line::from(Span::styled(placeholder.to_string(), theme.text_dim()))
            }
            _ => Line::from(Span::styled(
                self.input.value().chars().skip(scroll).collect::<String>(),
                theme.text(),
            )),
        };

        let border = if focused {
            theme.border_focused()
        } else {
            theme.border()
        };
        let paragraph = Paragraph::new(content).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title.to_string())
                .border_style(border)
                .title_style(if focused { theme.title() } else { Style::default() }),
        );
        f.render_widget(paragraph, area);

        if focused && area.width > 2 && area.height > 2 {
            let offset = self.input.visual_cursor().saturating_sub(scroll) as u16;
            let x = (area.x + 1 + offset).min(area.x + area.width - 2);
            f.set_cursor_position(Position::new(x, area.y + 1));
        }
    }
}

impl From<&str> for SingleLineInput {
    fn from(s: &str) -> Self {
        Self::with_value(s)
    }
}

impl std::fmt::Display for SingleLineInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.input.value())
    }
}
