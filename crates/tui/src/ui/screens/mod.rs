//! Per-tab screen renderers.
//!
//! Each renderer reads one view's state and draws it; none of them mutate
//! the view.

pub mod batch;
pub mod browser;
pub mod device;
pub mod labels;
pub mod logs;
pub mod person;
pub mod tools;

use ratatui::{
    text::{Line, Span},
    widgets::{Block, Borders},
};

use crate::ui::theme::Theme;

/// Bordered block with the focused or unfocused border style.
pub(crate) fn panel<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let border = if focused {
        theme.border_focused()
    } else {
        theme.border()
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Span::styled(title, theme.title()))
}

/// `label: value` line with the label dimmed.
pub(crate) fn field_line<'a>(label: &'a str, value: impl Into<String>, theme: &Theme) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label}: "), theme.text_dim()),
        Span::styled(value.into(), theme.text()),
    ])
}

/// Display text for an optional backend value.
pub(crate) fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Warning lines for non-fatal backend errors.
pub(crate) fn warning_lines<'a>(errors: &'a [String], theme: &Theme) -> Vec<Line<'a>> {
    errors
        .iter()
        .map(|e| Line::from(Span::styled(format!("! {e}"), theme.warning())))
        .collect()
}
