//! Status line at the bottom of the screen.
//!
//! Replaces transient toasts with a single line that keeps the last message
//! until the next one arrives.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::ui::theme::{Theme, spinner_char};

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub message: String,
    pub level: StatusLevel,
}

impl StatusMessage {
    pub fn new(message: impl Into<String>, level: StatusLevel) -> Self {
        Self {
            message: message.into(),
            level,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, StatusLevel::Error)
    }
}

/// Draw the status line: spinner while busy, the last message, key hints.
pub fn render_status(
    f: &mut Frame,
    area: Rect,
    status: Option<&StatusMessage>,
    busy: bool,
    spinner_frame: u8,
    theme: &Theme,
) {
    let mut spans = Vec::new();
    if busy {
        spans.push(Span::styled(
            format!(" {} ", spinner_char(spinner_frame)),
            theme.warning(),
        ));
    } else {
        spans.push(Span::raw(" "));
    }

    match status {
        Some(status) => {
            let style = match status.level {
                StatusLevel::Info => theme.info(),
                StatusLevel::Success => theme.success(),
                StatusLevel::Warning => theme.warning(),
                StatusLevel::Error => theme.error(),
            };
            spans.push(Span::styled(format!("[{}] ", status.level.label()), style));
            spans.push(Span::styled(status.message.clone(), theme.text()));
        }
        None => spans.push(Span::styled("Ready", theme.text_dim())),
    }

    spans.push(Span::styled(
        "  |  Tab:Next  1-7:Jump  ?:Help  q:Quit",
        theme.text_dim(),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
