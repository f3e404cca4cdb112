//! CSV splitter screen.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::views::{BatchFocus, BatchView};
use crate::resource::ResourceState;
use crate::ui::screens::{field_line, panel};
use crate::ui::theme::{Theme, spinner_char};

pub fn render_batch(f: &mut Frame, area: Rect, view: &BatchView, spinner_frame: u8, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    view.path.render(
        f,
        rows[0],
        "CSV file (Enter to count rows)",
        view.focus == BatchFocus::Path,
        theme,
    );
    view.rows
        .render(f, rows[1], "Rows per chunk", view.focus == BatchFocus::Rows, theme);

    let button = |label: &'static str, focused: bool| {
        if focused {
            Span::styled(label, theme.highlight())
        } else {
            Span::styled(label, theme.text())
        }
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            button("[ Split ]", view.focus == BatchFocus::Split),
            Span::raw("  "),
            button("[ Save archive ]", view.focus == BatchFocus::Save),
        ])),
        rows[2],
    );

    let spinner = || format!("{} ", spinner_char(spinner_frame));
    let mut lines = Vec::new();

    let rows_text = match view.inspection.state() {
        ResourceState::Idle => "-".to_string(),
        ResourceState::Pending => format!("{}counting", spinner()),
        ResourceState::Ready(inspection) => inspection.rows.to_string(),
        ResourceState::Failed(message) => message.clone(),
    };
    lines.push(field_line("Data rows", rows_text, theme));
    lines.push(field_line(
        "Expected chunks",
        view.expected_chunks()
            .map_or_else(|| "-".to_string(), |n| n.to_string()),
        theme,
    ));
    lines.push(Line::raw(""));

    match view.split.state() {
        ResourceState::Idle => lines.push(Line::from(Span::styled(
            "No archive yet.",
            theme.text_dim(),
        ))),
        ResourceState::Pending => lines.push(Line::from(Span::styled(
            format!("{}Uploading and splitting...", spinner()),
            theme.text(),
        ))),
        ResourceState::Failed(message) => {
            lines.push(Line::from(Span::styled(message.clone(), theme.error())))
        }
        ResourceState::Ready(archive) => {
            lines.push(field_line("Archive", archive.file_name.clone(), theme));
            lines.push(field_line("Size", format!("{} bytes", archive.bytes.len()), theme));
            let entries = archive
                .entries
                .map_or_else(|| "unreadable".to_string(), |n| n.to_string());
            let mismatch = matches!(
                (archive.entries, view.expected_chunks()),
                (Some(actual), Some(expected)) if actual as u64 != expected
            );
            let style = if mismatch { theme.warning() } else { theme.text() };
            lines.push(Line::from(vec![
                Span::styled("Chunk files: ", theme.text_dim()),
                Span::styled(entries, style),
            ]));
        }
    }

    if let Some(path) = &view.saved_to {
        lines.push(Line::raw(""));
        lines.push(field_line("Saved to", path.display().to_string(), theme));
    } else {
        lines.push(Line::raw(""));
        lines.push(field_line(
            "Download directory",
            view.download_dir().display().to_string(),
            theme,
        ));
    }

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Split", false, theme)),
        rows[3],
    );
}
