//! Person lookup screen.
//!
//! Shows the account card only when an account came back and the user card
//! only when a Cognito user came back; either may be missing.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::views::{PersonFocus, PersonView};
use crate::ui::screens::{field_line, or_dash, panel, warning_lines};
use crate::ui::theme::Theme;
use crate::ui::widgets::render_resource;

pub fn render_person(f: &mut Frame, area: Rect, view: &PersonView, spinner_frame: u8, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    view.input.render(
        f,
        chunks[0],
        "Person ID (Enter to look up)",
        view.focus == PersonFocus::Input,
        theme,
    );

    render_resource(
        f,
        chunks[1],
        "Person",
        &view.lookup,
        "Enter a person ID and press Enter.",
        spinner_frame,
        theme,
        |f, area, lookup| {
            let mut lines = warning_lines(&lookup.errors, theme);
            if !lines.is_empty() {
                lines.push(Line::raw(""));
            }

            if let Some(account) = &lookup.account {
                lines.push(Line::from(Span::styled("Account", theme.title())));
                lines.push(field_line("  ID", or_dash(account.id.as_deref()), theme));
                lines.push(field_line("  Name", or_dash(account.name.as_deref()), theme));
                lines.push(Line::raw(""));
            }

            if let Some(user) = &lookup.cognito_user {
                lines.push(Line::from(Span::styled("User", theme.title())));
                lines.push(field_line("  Username", or_dash(user.username.as_deref()), theme));
                lines.push(field_line("  Status", or_dash(user.status.as_deref()), theme));
                for (key, value) in &user.attributes {
                    lines.push(Line::from(vec![
                        Span::styled(format!("  {key}: "), theme.text_dim()),
                        Span::styled(value.clone(), theme.text()),
                    ]));
                }
                if view.enabled.is_some() {
                    lines.push(enabled_line(view, theme));
                }
            }

            let widget = Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .block(panel("Person", view.focus == PersonFocus::Toggle, theme));
            f.render_widget(widget, area);
        },
    );
}

fn enabled_line<'a>(view: &PersonView, theme: &Theme) -> Line<'a> {
    let (text, style) = match view.enabled {
        Some(true) => ("[x] Enabled", theme.success()),
        _ => ("[ ] Disabled", theme.warning()),
    };
    let style = if view.focus == PersonFocus::Toggle {
        theme.highlight()
    } else {
        style
    };
    let mut spans = vec![Span::raw("  "), Span::styled(text, style)];
    if view.is_saving() {
        spans.push(Span::styled("  saving...", theme.text_dim()));
    }
    Line::from(spans)
}
