//! Shared placeholder widgets: loading spinner, empty and failed states.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::resource::{RemoteResource, ResourceState};
use crate::ui::theme::{Theme, spinner_char};

/// Render a bordered, centered one-message panel.
pub fn render_placeholder(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    style: Style,
    theme: &Theme,
) {
    let widget = Paragraph::new(message)
        .style(style)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(theme.border())
                .title_style(theme.title()),
        );
    f.render_widget(widget, area);
}

/// Render a loading state widget with spinner animation.
pub fn render_loading_state(
    f: &mut Frame,
    area: Rect,
    title: &str,
    message: &str,
    spinner_frame: u8,
    theme: &Theme,
) {
    let text = format!("{} {}", spinner_char(spinner_frame), message);
    render_placeholder(f, area, title, &text, theme.text(), theme);
}

/// Render the non-ready states of a resource, or hand the value to `ready`.
///
/// A `Ready` value is always drawn by `ready`, even while a refresh is in
/// flight, so the screen does not flicker after a write.
#[allow(clippy::too_many_arguments)]
pub fn render_resource<T>(
    f: &mut Frame,
    area: Rect,
    title: &str,
    resource: &RemoteResource<T>,
    idle_hint: &str,
    spinner_frame: u8,
    theme: &Theme,
    ready: impl FnOnce(&mut Frame, Rect, &T),
) {
    match resource.state() {
        ResourceState::Ready(value) => ready(f, area, value),
        ResourceState::Pending => {
            render_loading_state(f, area, title, "Loading...", spinner_frame, theme)
        }
        ResourceState::Failed(message) => {
            render_placeholder(f, area, title, message, theme.error(), theme)
        }
        ResourceState::Idle => render_placeholder(f, area, title, idle_hint, theme.text_dim(), theme),
    }
}
