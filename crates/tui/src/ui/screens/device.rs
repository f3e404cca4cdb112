//! Device lookup screen: device facts on the left, shadow editor on the right.

use opsdash_client::DeviceLookup;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::app::views::{DeviceFocus, DeviceView, FieldKind, SHADOW_FIELDS};
use crate::ui::screens::{field_line, or_dash, panel, warning_lines};
use crate::ui::theme::Theme;
use crate::ui::widgets::render_resource;

const LABEL_WIDTH: usize = 24;

pub fn render_device(f: &mut Frame, area: Rect, view: &DeviceView, spinner_frame: u8, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    view.input.render(
        f,
        chunks[0],
        "ICCID (Enter to look up)",
        view.focus == DeviceFocus::Iccid,
        theme,
    );

    render_resource(
        f,
        chunks[1],
        "Device",
        &view.lookup,
        "Enter a 19 or 20 digit ICCID and press Enter.",
        spinner_frame,
        theme,
        |f, area, device| {
            let columns = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
                .split(area);
            render_facts(f, columns[0], device, theme);
            render_shadow(f, columns[1], view, theme);
        },
    );
}

fn render_facts(f: &mut Frame, area: Rect, device: &DeviceLookup, theme: &Theme) {
    let mut lines = warning_lines(&device.errors, theme);

    if let Some(general) = &device.general {
        lines.push(Line::from(Span::styled("General", theme.title())));
        lines.push(field_line("  ICCID", or_dash(general.iccid.as_deref()), theme));
        lines.push(field_line(
            "  Year of manufacture",
            or_dash(general.year_of_manufacture.as_deref()),
            theme,
        ));
        lines.push(field_line(
            "  Refurb records",
            general.refurb_records.map_or("-".into(), |n| n.to_string()),
            theme,
        ));
        lines.push(field_line("  Device type", or_dash(general.device_type.as_deref()), theme));
        if let Some(replaced) = general.battery_replaced {
            lines.push(field_line("  Battery replaced", if replaced { "yes" } else { "no" }, theme));
        }
    }

    if let Some(reg) = &device.registration {
        lines.push(Line::from(Span::styled("Registration", theme.title())));
        lines.push(field_line("  Account", or_dash(reg.account_name.as_deref()), theme));
        lines.push(field_line("  Registered", or_dash(reg.registration_time.as_deref()), theme));
        lines.push(field_line(
            "  Firmware",
            or_dash(reg.firmware_on_registration.as_deref()),
            theme,
        ));
        lines.push(field_line(
            "  Battery",
            or_dash(reg.battery_on_registration.as_deref()),
            theme,
        ));
    }

    if let Some(hb) = &device.heartbeat {
        lines.push(Line::from(Span::styled("Heartbeat", theme.title())));
        lines.push(field_line("  Last seen", or_dash(hb.last_seen.as_deref()), theme));
        lines.push(field_line("  Firmware", or_dash(hb.firmware.as_deref()), theme));
        lines.push(field_line("  Battery %", or_dash(hb.battery_percentage.as_deref()), theme));
        lines.push(field_line("  GPS", or_dash(hb.gps_status.as_deref()), theme));
        lines.push(field_line("  Location", or_dash(hb.location.as_deref()), theme));
        if let Some(url) = hb.location_url.as_deref() {
            lines.push(field_line("  Map", url, theme));
        }
    }

    if let Some(jobs) = device.iot.as_ref().and_then(|iot| iot.jobs.as_ref()) {
        lines.push(Line::from(Span::styled("IoT jobs", theme.title())));
        if jobs.is_empty() {
            lines.push(Line::from(Span::styled("  none", theme.text_dim())));
        }
        for job in jobs {
            lines.push(Line::from(format!(
                "  {}  {}  {}",
                or_dash(job.job_id.as_deref()),
                or_dash(job.simplified_status.as_deref().or(job.status.as_deref())),
                or_dash(job.last_updated_at.as_deref()),
            )));
        }
    }

    let widget = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(panel("Device", false, theme));
    f.render_widget(widget, area);
}

fn render_shadow(f: &mut Frame, area: Rect, view: &DeviceView, theme: &Theme) {
    if !view.has_shadow() {
        let widget = Paragraph::new(Span::styled("No shadow for this device.", theme.text_dim()))
            .block(panel("Shadow", false, theme));
        f.render_widget(widget, area);
        return;
    }

    let editor = &view.shadow;
    let mut lines = Vec::with_capacity(SHADOW_FIELDS.len() + 3);
    lines.push(field_line("Last Updated", or_dash(editor.last_updated()), theme));

    let mut cursor = None;
    for (i, field) in SHADOW_FIELDS.iter().enumerate() {
        let focused = view.focus == DeviceFocus::Field(i);
        let value = match field.kind {
            FieldKind::Boolean => match editor.flag(i) {
                Some(true) => "[x]".to_string(),
                Some(false) => "[ ]".to_string(),
                None => "[?]".to_string(),
            },
            _ => editor.value(i).to_string(),
        };
        let value_style = if focused {
            theme.highlight()
        } else if editor.is_dirty(i) {
            theme.accent()
        } else {
            theme.text()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:<LABEL_WIDTH$}", field.label), theme.text_dim()),
            Span::styled(value, value_style),
        ]));

        if focused && field.kind != FieldKind::Boolean {
            let column = LABEL_WIDTH + editor.input(i).map_or(0, |input| input.cursor_position());
            cursor = Some((column, lines.len() - 1));
        }
    }

    lines.push(Line::raw(""));
    let submit = if editor.is_saving() {
        Span::styled("[ Saving... ]", theme.text_dim())
    } else if view.focus == DeviceFocus::Submit {
        Span::styled("[ Update shadow ]", theme.highlight())
    } else {
        Span::styled("[ Update shadow ]", theme.text())
    };
    lines.push(Line::from(submit));

    let focused = matches!(view.focus, DeviceFocus::Field(_) | DeviceFocus::Submit);
    f.render_widget(Paragraph::new(lines).block(panel("Shadow", focused, theme)), area);

    if let Some((column, row)) = cursor {
        let x = area.x + 1 + column as u16;
        let y = area.y + 1 + row as u16;
        if x < area.right().saturating_sub(1) && y < area.bottom().saturating_sub(1) {
            f.set_cursor_position(Position::new(x, y));
        }
    }
}
