//! Modal popups for help, confirmations and errors.
//!
//! Popups are built with a small builder and rendered as a centered dialog
//! over the main UI.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::confirm::ConfirmRequest;
use crate::ui::theme::Theme;

/// Default popup dimensions as percentages of screen size.
pub const POPUP_WIDTH_PERCENT: u16 = 60;
pub const POPUP_HEIGHT_PERCENT: u16 = 50;

const HELP_TEXT: &str = "\
Global
  Tab / Shift+Tab   next / previous tab
  1-7               jump to tab
  ?                 this help
  q / Ctrl+C        quit

Forms
  Up / Down         move between fields
  Enter             submit or activate
  Space             toggle a boolean

Logs:   Left/Right choose profile and handler, PgUp/PgDn scroll results
S3:     Backspace goes up one folder, s saves the preview
Labels: Left/Right switch day, r refreshes
Tools:  Enter runs the report";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PopupType {
    Help,
    /// A mutation waiting for y/n.
    Confirm(ConfirmRequest),
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Popup {
    pub title: String,
    pub content: String,
    pub kind: PopupType,
}

impl Popup {
    pub fn builder(kind: PopupType) -> PopupBuilder {
        PopupBuilder::new(kind)
    }

    pub fn help() -> Self {
        Self::builder(PopupType::Help).build()
    }

    pub fn confirm(request: ConfirmRequest) -> Self {
        let prompt = request.prompt();
        Self::builder(PopupType::Confirm(request))
            .title(prompt.title)
            .content(prompt.message)
            .build()
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::builder(PopupType::Error).content(message).build()
    }
}

pub struct PopupBuilder {
    kind: PopupType,
    title: Option<String>,
    content: Option<String>,
}

impl PopupBuilder {
    pub fn new(kind: PopupType) -> Self {
        Self {
            kind,
            title: None,
            content: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn build(self) -> Popup {
        let (default_title, default_content) = match &self.kind {
            PopupType::Help => ("Help", HELP_TEXT),
            PopupType::Confirm(_) => ("Confirm", "Are you sure?"),
            PopupType::Error => ("Error", "Something went wrong"),
        };
        Popup {
            title: self.title.unwrap_or_else(|| default_title.to_string()),
            content: self.content.unwrap_or_else(|| default_content.to_string()),
            kind: self.kind,
        }
    }
}

/// Render a modal popup dialog.
pub fn render_popup(f: &mut Frame, popup: &Popup, theme: &Theme) {
    let (width, height) = match popup.kind {
        PopupType::Help => (POPUP_WIDTH_PERCENT, 70),
        PopupType::Confirm(_) | PopupType::Error => (POPUP_WIDTH_PERCENT, 30),
    };
    let area = centered_rect(width, height, f.area());
    f.render_widget(Clear, area);

    let border = match popup.kind {
        PopupType::Help => theme.border_focused(),
        PopupType::Confirm(_) => theme.warning(),
        PopupType::Error => theme.error(),
    };
    let hint = match popup.kind {
        PopupType::Help => " Esc to close ",
        PopupType::Confirm(_) => " y: yes  n/Esc: no ",
        PopupType::Error => " any key to close ",
    };

    let mut lines: Vec<Line> = popup
        .content
        .lines()
        .map(|l| Line::from(Span::styled(l.to_string(), theme.text())))
        .collect();
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(hint, theme.text_dim())));

    let alignment = match popup.kind {
        PopupType::Help => Alignment::Left,
        _ => Alignment::Center,
    };
    let paragraph = Paragraph::new(lines)
        .alignment(alignment)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(format!(" {} ", popup.title), theme.title())),
        );
    f.render_widget(paragraph, area);
}

/// A rectangle of the given percentage size centered in `r`.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
