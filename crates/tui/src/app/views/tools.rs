//! Modem failed-count report.

use crossterm::event::{KeyCode, KeyEvent};
use opsdash_client::ToolReport;

use crate::action::{Action, ApiResult};
use crate::app::views::Outcome;
use crate::resource::{RemoteResource, Ticket};

#[derive(Debug, Default)]
pub struct ToolsView {
    pub report: RemoteResource<ToolReport>,
    pub scroll: u16,
}

impl ToolsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Enter | KeyCode::Char('r') => {
                if self.report.is_loading() {
                    return Outcome::none();
                }
                self.scroll = 0;
                let ticket = self.report.begin();
                Outcome::command(Action::LoadModemFailedCount { ticket })
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                Outcome::none()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Outcome::none()
            }
            _ => Outcome::none(),
        }
    }

    /// Text shown in the report panel, if any.
    pub fn display_text(&self) -> Option<String> {
        self.report.ready().map(ToolReport::display_text)
    }

    pub fn on_report(&mut self, ticket: Ticket, result: ApiResult<ToolReport>) -> Outcome {
        let result = match result {
            Ok(report) => match report.error() {
                Some(error) => Err(error.to_string()),
                None => Ok(report),
            },
            Err(e) => Err(e.user_message()),
        };
        if self.report.resolve(ticket, result).is_stale() {
            return Outcome::stale("tools");
        }
        Outcome::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use serde_json::json;

    fn run(view: &mut ToolsView) -> Ticket {
        let outcome = view.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        let Some(Action::LoadModemFailedCount { ticket }) = outcome.command else {
            panic!("expected report request");
        };
        ticket
    }

    #[test]
    fn test_message_is_displayed() {
        let mut view = ToolsView::new();
        let ticket = run(&mut view);
        view.on_report(ticket, Ok(ToolReport(json!({"message": "3 failed modems"}))));
        assert_eq!(view.display_text().as_deref(), Some("3 failed modems"));
    }

    #[test]
    fn test_error_body_is_failed() {
        let mut view = ToolsView::new();
        let ticket = run(&mut view);
        view.on_report(ticket, Ok(ToolReport(json!({"error": "query failed"}))));
        assert_eq!(view.report.error(), Some("query failed"));
        assert!(view.display_text().is_none());
    }

    #[test]
    fn test_second_press_while_loading_is_ignored() {
        let mut view = ToolsView::new();
        run(&mut view);
        let outcome = view.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(outcome.command.is_none());
    }
}
