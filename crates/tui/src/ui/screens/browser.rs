//! S3 viewer screen: bucket field, breadcrumbs, listing and preview panel.

use opsdash_client::EntryKind;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, Wrap},
};

use crate::app::views::{BrowserFocus, BrowserView, Preview, breadcrumbs};
use crate::ui::screens::{field_line, panel};
use crate::ui::theme::Theme;
use crate::ui::widgets::render_resource;

pub fn render_browser(f: &mut Frame, area: Rect, view: &BrowserView, spinner_frame: u8, theme: &Theme) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(0),
        ])
        .split(area);

    view.bucket_input.render(
        f,
        rows[0],
        "Bucket (Enter to connect, blank for default)",
        view.focus == BrowserFocus::Bucket,
        theme,
    );
    render_breadcrumbs(f, rows[1], view, theme);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);

    render_resource(
        f,
        columns[0],
        "Objects",
        &view.listing,
        "Connect to a bucket to list objects.",
        spinner_frame,
        theme,
        |f, area, entries| {
            let items: Vec<ListItem> = entries
                .iter()
                .map(|entry| {
                    let (icon, style) = match entry.kind {
                        EntryKind::Folder => ("[D] ", theme.accent()),
                        EntryKind::File | EntryKind::Other => ("    ", theme.text()),
                    };
                    ListItem::new(Line::from(vec![
                        Span::styled(icon, theme.text_dim()),
                        Span::styled(entry.name.clone(), style),
                    ]))
                })
                .collect();
            let title = if entries.is_empty() {
                "Objects (empty)".to_string()
            } else {
                format!("Objects ({})", entries.len())
            };
            let list = List::new(items)
                .block(panel(&title, view.focus == BrowserFocus::Entries, theme))
                .highlight_style(theme.highlight());
            let mut state = ListState::default().with_selected(Some(view.selected));
            f.render_stateful_widget(list, area, &mut state);
        },
    );

    render_resource(
        f,
        columns[1],
        "Preview",
        &view.preview,
        "Select a previewable file and press Enter.",
        spinner_frame,
        theme,
        |f, area, preview| render_preview(f, area, preview, view.is_saving(), theme),
    );
}

fn render_breadcrumbs(f: &mut Frame, area: Rect, view: &BrowserView, theme: &Theme) {
    let focused = view.focus == BrowserFocus::Breadcrumbs;
    let root = view.bucket.as_deref().unwrap_or("(no bucket)");
    let mut spans = Vec::new();
    let names = std::iter::once(root).chain(breadcrumbs(&view.prefix));
    for (i, name) in names.enumerate() {
        if i > 0 {
            spans.push(Span::styled(" / ", theme.text_dim()));
        }
        let style = if focused && i == view.crumb {
            theme.highlight()
        } else {
            theme.text()
        };
        spans.push(Span::styled(name.to_string(), style));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).block(panel("Path", focused, theme)),
        area,
    );
}

fn render_preview(f: &mut Frame, area: Rect, preview: &Preview, saving: bool, theme: &Theme) {
    let mut lines = vec![
        field_line("Key", preview.key.clone(), theme),
        field_line("Size", format!("{} bytes", preview.size), theme),
        field_line("Last modified", preview.last_modified.clone(), theme),
        field_line("Type", preview.media_type.clone(), theme),
    ];
    if let Some((w, h)) = preview.dimensions {
        lines.push(field_line("Dimensions", format!("{w} x {h}"), theme));
    }
    lines.push(Line::raw(""));
    lines.push(if saving {
        Line::from(Span::styled("Saving...", theme.text_dim()))
    } else {
        Line::from(Span::styled("Press s to save to the download directory", theme.text_dim()))
    });

    f.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(panel("Preview", false, theme)),
        area,
    );
}
