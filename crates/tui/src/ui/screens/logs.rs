//! Log search screen.

use opsdash_client::LogEntry;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table},
};

use crate::app::views::{LogsFocus, LogsView};
use crate::resource::{RemoteResource, ResourceState};
use crate::ui::screens::panel;
use crate::ui::theme::{Theme, spinner_char};
use crate::ui::widgets::{render_placeholder, render_resource};

pub fn render_logs(f: &mut Frame, area: Rect, view: &LogsView, spinner_frame: u8, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    let selectors = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    render_selector(
        f,
        selectors[0],
        "AWS profile (Left/Right)",
        &view.profiles,
        view.selected_profile(),
        view.focus == LogsFocus::Profile,
        spinner_frame,
        theme,
    );
    render_selector(
        f,
        selectors[1],
        "Handler (Left/Right)",
        &view.handlers,
        view.selected_handler(),
        view.focus == LogsFocus::Handler,
        spinner_frame,
        theme,
    );

    let inputs = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(30),
            Constraint::Percentage(30),
        ])
        .split(rows[1]);
    view.search_term
        .render(f, inputs[0], "Search term", view.focus == LogsFocus::SearchTerm, theme);
    view.start
        .render(f, inputs[1], "Start (YYYY-MM-DD HH:MM)", view.focus == LogsFocus::Start, theme);
    view.end
        .render(f, inputs[2], "End (YYYY-MM-DD HH:MM)", view.focus == LogsFocus::End, theme);

    let submit_style = if view.focus == LogsFocus::Submit {
        theme.highlight()
    } else {
        theme.text()
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::raw(" "),
            Span::styled("[ Search ]", submit_style),
        ])),
        rows[2],
    );

    render_resource(
        f,
        rows[3],
        "Results",
        &view.results,
        "Choose a profile and handler, enter a term and press Enter.",
        spinner_frame,
        theme,
        |f, area, entries| render_results(f, area, entries, view.scroll, theme),
    );
}

#[allow(clippy::too_many_arguments)]
fn render_selector(
    f: &mut Frame,
    area: Rect,
    title: &str,
    options: &RemoteResource<Vec<String>>,
    selected: Option<&str>,
    focused: bool,
    spinner_frame: u8,
    theme: &Theme,
) {
    let content = match options.state() {
        ResourceState::Pending => Span::styled(
            format!("{} loading", spinner_char(spinner_frame)),
            theme.text_dim(),
        ),
        ResourceState::Failed(message) => Span::styled(message.clone(), theme.error()),
        ResourceState::Ready(list) if list.is_empty() => Span::styled("none available", theme.text_dim()),
        _ => match selected {
            Some(value) => Span::styled(format!("< {value} >"), theme.text()),
            None => Span::styled("-", theme.text_dim()),
        },
    };
    f.render_widget(Paragraph::new(Line::from(content)).block(panel(title, focused, theme)), area);
}

fn render_results(f: &mut Frame, area: Rect, entries: &[LogEntry], scroll: usize, theme: &Theme) {
    if entries.is_empty() {
        render_placeholder(f, area, "Results", "No results found.", theme.text_dim(), theme);
        return;
    }

    let header = Row::new(["Timestamp", "Log stream", "Message"]).style(theme.table_header());
    let rows = entries.iter().skip(scroll).map(|entry| {
        Row::new(vec![
            Cell::from(entry.timestamp.clone()),
            Cell::from(entry.log_stream.clone()),
            Cell::from(entry.message.trim_end().to_string()),
        ])
    });
    let title = format!("Results ({})", entries.len());
    let table = Table::new(
        rows,
        [
            Constraint::Length(24),
            Constraint::Percentage(25),
            Constraint::Min(20),
        ],
    )
    .header(header)
    .block(panel(&title, false, theme));
    f.render_widget(table, area);
}
