//! Tools screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::views::ToolsView;
use crate::ui::screens::panel;
use crate::ui::theme::Theme;
use crate::ui::widgets::render_resource;

pub fn render_tools(f: &mut Frame, area: Rect, view: &ToolsView, spinner_frame: u8, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(area);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled("[ Modem failed count ]", theme.highlight()),
            Span::styled("  Enter to run", theme.text_dim()),
        ])),
        rows[0],
    );

    render_resource(
        f,
        rows[1],
        "Report",
        &view.report,
        "Press Enter to run the report.",
        spinner_frame,
        theme,
        |f, area, _| {
            let text = view.display_text().unwrap_or_default();
            f.render_widget(
                Paragraph::new(text)
                    .style(theme.text())
                    .wrap(Wrap { trim: false })
                    .scroll((view.scroll, 0))
                    .block(panel("Modem failed count", false, theme)),
                area,
            );
        },
    );
}
