//! Labels report for today or tomorrow.
//!
//! One output buffer is shown at a time, tagged with the day it belongs to.
//! Switching day issues a fresh request; the answer for the other day is
//! dropped as stale.

use crossterm::event::{KeyCode, KeyEvent};
use opsdash_client::{LabelDay, LabelsOutput};

use crate::action::{Action, ApiResult};
use crate::app::views::Outcome;
use crate::resource::{RemoteResource, Ticket};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelsFocus {
    #[default]
    Today,
    Tomorrow,
}

impl LabelsFocus {
    pub fn day(self) -> LabelDay {
        match self {
            LabelsFocus::Today => LabelDay::Today,
            LabelsFocus::Tomorrow => LabelDay::Tomorrow,
        }
    }

    fn toggled(self) -> Self {
        match self {
            LabelsFocus::Today => LabelsFocus::Tomorrow,
            LabelsFocus::Tomorrow => LabelsFocus::Today,
        }
    }
}

#[derive(Debug, Default)]
pub struct LabelsView {
    pub focus: LabelsFocus,
    pub output: RemoteResource<(LabelDay, String)>,
    pub scroll: u16,
}

impl LabelsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load today's labels when the tab is opened.
    pub fn enter(&mut self) -> Outcome {
        self.focus = LabelsFocus::Today;
        self.load()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Left | KeyCode::Right | KeyCode::Char('t') => {
                self.focus = self.focus.toggled();
                self.load()
            }
            KeyCode::Enter | KeyCode::Char('r') => self.load(),
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                Outcome::none()
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                Outcome::none()
            }
            KeyCode::PageDown => {
                self.scroll = self.scroll.saturating_add(10);
                Outcome::none()
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                Outcome::none()
            }
            _ => Outcome::none(),
        }
    }

    fn load(&mut self) -> Outcome {
        self.scroll = 0;
        let ticket = self.output.begin();
        Outcome::command(Action::LoadLabels {
            ticket,
            day: self.focus.day(),
        })
    }

    pub fn on_labels(
        &mut self,
        ticket: Ticket,
        day: LabelDay,
        result: ApiResult<LabelsOutput>,
    ) -> Outcome {
        let result = result
            .map(|labels| (day, labels.output))
            .map_err(|e| e.user_message());
        if self.output.resolve(ticket, result).is_stale() {
            return Outcome::stale("labels");
        }
        Outcome::none()
    }
}
