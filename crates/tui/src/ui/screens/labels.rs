//! Labels report screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Tabs},
};

use crate::app::views::{LabelsFocus, LabelsView};
use crate::ui::screens::panel;
use crate::ui::theme::Theme;
use crate::ui::widgets::render_resource;

pub fn render_labels(f: &mut Frame, area: Rect, view: &LabelsView, spinner_frame: u8, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let selected = match view.focus {
        LabelsFocus::Today => 0,
        LabelsFocus::Tomorrow => 1,
    };
    let tabs = Tabs::new(["Today", "Tomorrow"])
        .select(selected)
        .style(theme.text())
        .highlight_style(theme.highlight())
        .block(panel("Day (Left/Right, r to refresh)", true, theme));
    f.render_widget(tabs, rows[0]);

    render_resource(
        f,
        rows[1],
        "Labels",
        &view.output,
        "Press r to load labels.",
        spinner_frame,
        theme,
        |f, area, (day, output)| {
            let title = format!("Labels: {}", day.label());
            let text: Vec<Line> = if output.trim().is_empty() {
                vec![Line::from(Span::styled("No labels.", theme.text_dim()))]
            } else {
                output.lines().map(|l| Line::raw(l.to_string())).collect()
            };
            f.render_widget(
                Paragraph::new(text)
                    .scroll((view.scroll, 0))
                    .block(panel(&title, false, theme)),
                area,
            );
        },
    );
}
