//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main layout (header with tabs, content, status line)
//! - Dispatch to screen-specific renderers
//! - Draw the active popup on top
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
};

use crate::app::App;
use crate::app::state::{CurrentScreen, FOOTER_HEIGHT, HEADER_HEIGHT, HealthState};
use crate::ui::render_popup;
use crate::ui::screens::{batch, browser, device, labels, logs, person, tools};
use crate::ui::status::render_status;

impl App {
    /// Render the application UI.
    pub fn render(&self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(f.area());

        self.render_header(f, chunks[0]);
        self.render_content(f, chunks[1]);
        render_status(
            f,
            chunks[2],
            self.status.as_ref(),
            self.is_busy(),
            self.spinner_frame,
            &self.theme,
        );

        if let Some(popup) = &self.popup {
            render_popup(f, popup, &self.theme);
        }
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let (indicator, style) = match self.health {
            HealthState::Healthy => ("[+]", theme.success()),
            HealthState::Degraded => ("[~]", theme.warning()),
            HealthState::Unreachable => ("[!]", theme.error()),
            HealthState::Checking => ("[?]", theme.text_dim()),
        };
        let backend = Line::from(vec![
            Span::styled(indicator, style),
            Span::raw(" "),
            Span::styled(self.health.label(), style),
            Span::styled(format!("  {} ", self.base_url()), theme.text_dim()),
        ]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border())
            .title(Span::styled(" opsdash ", theme.title()))
            .title_top(backend.right_aligned());

        let titles = CurrentScreen::ALL
            .iter()
            .enumerate()
            .map(|(i, screen)| format!("{} {}", i + 1, screen.title()));
        let tabs = Tabs::new(titles)
            .select(self.current_screen.index())
            .style(theme.text())
            .highlight_style(theme.highlight())
            .block(block);
        f.render_widget(tabs, area);
    }

    fn render_content(&self, f: &mut Frame, area: Rect) {
        let frame = self.spinner_frame;
        let theme = &self.theme;
        match self.current_screen {
            CurrentScreen::Person => person::render_person(f, area, &self.person, frame, theme),
            CurrentScreen::Device => device::render_device(f, area, &self.device, frame, theme),
            CurrentScreen::Logs => logs::render_logs(f, area, &self.logs, frame, theme),
            CurrentScreen::S3 => browser::render_browser(f, area, &self.browser, frame, theme),
            CurrentScreen::CsvSplit => batch::render_batch(f, area, &self.batch, frame, theme),
            CurrentScreen::Labels => labels::render_labels(f, area, &self.labels, frame, theme),
            CurrentScreen::Tools => tools::render_tools(f, area, &self.tools, frame, theme),
        }
    }
}
