//! Person lookup and the user enabled toggle.
//!
//! Responsibilities:
//! - Look up a person by ID and keep the last answer.
//! - Stage an enable/disable of the Cognito user behind a confirmation,
//!   apply it optimistically and reconcile with the backend.
//!
//! Invariants:
//! - At most one enable/disable write is in flight; further toggles are ignored.
//! - A failed write restores the exact value shown before the toggle.
//! - A successful write is followed by a refetch; the refetched value wins.

use crossterm::event::{KeyCode, KeyEvent};
use opsdash_client::{MessageResponse, PersonLookup};

use crate::action::{Action, ApiResult};
use crate::app::input::SingleLineInput;
use crate::app::views::Outcome;
use crate::confirm::ConfirmRequest;
use crate::resource::{RemoteResource, Ticket};
use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PersonFocus {
    #[default]
    Input,
    Toggle,
}

#[derive(Debug, Clone, Copy)]
struct PendingWrite {
    ticket: Ticket,
    previous: bool,
}

#[derive(Debug, Default)]
pub struct PersonView {
    pub input: SingleLineInput,
    pub focus: PersonFocus,
    pub lookup: RemoteResource<PersonLookup>,
    /// Enabled flag as displayed; diverges from `lookup` while a write is pending.
    pub enabled: Option<bool>,
    person_id: Option<String>,
    write: Option<PendingWrite>,
}

impl PersonView {
    pub fn new() -> Self {
        Self {
            input: SingleLineInput::with_placeholder("e.g. 3f2b9c1e-..."),
            ..Self::default()
        }
    }

    pub fn captures_text(&self) -> bool {
        self.focus == PersonFocus::Input
    }

    /// Whether an enable/disable request is outstanding.
    pub fn is_saving(&self) -> bool {
        self.write.is_some()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        match key.code {
            KeyCode::Up | KeyCode::Down => {
                self.focus = match self.focus {
                    PersonFocus::Input if self.enabled.is_some() => PersonFocus::Toggle,
                    _ => PersonFocus::Input,
                };
                Outcome::none()
            }
            KeyCode::Enter => match self.focus {
                PersonFocus::Input => self.submit(),
                PersonFocus::Toggle => self.request_toggle(),
            },
            KeyCode::Char(' ') if self.focus == PersonFocus::Toggle => self.request_toggle(),
            _ => {
                if self.focus == PersonFocus::Input {
                    self.input.handle_key(key);
                }
                Outcome::none()
            }
        }
    }

    fn submit(&mut self) -> Outcome {
        if self.lookup.is_loading() {
            return Outcome::none();
        }
        let person_id = self.input.value().trim().to_string();
        if person_id.is_empty() {
            return Outcome::invalid(ValidationError::MissingPersonId);
        }

        let ticket = self.lookup.begin();
        self.enabled = None;
        self.write = None;
        self.person_id = Some(person_id.clone());
        Outcome::command(Action::LookupPerson { ticket, person_id })
    }

    fn request_toggle(&mut self) -> Outcome {
        if self.write.is_some() {
            return Outcome::none();
        }
        match self.enabled {
            Some(current) => Outcome::confirm(ConfirmRequest::PersonEnabled { enabled: !current }),
            None => Outcome::none(),
        }
    }

    /// Apply a confirmed toggle: optimistic update, then the write.
    pub fn apply_toggle(&mut self, enabled: bool) -> Outcome {
        if self.write.is_some() {
            return Outcome::none();
        }
        let (Some(previous), Some(person_id)) = (self.enabled, self.person_id.clone()) else {
            return Outcome::none();
        };

        let ticket = Ticket::next();
        self.enabled = Some(enabled);
        self.write = Some(PendingWrite { ticket, previous });
        Outcome::command(Action::SetPersonEnabled {
            ticket,
            person_id,
            enabled,
        })
    }

    pub fn on_lookup(&mut self, ticket: Ticket, result: ApiResult<PersonLookup>) -> Outcome {
        let result = match result {
            Ok(lookup) => match lookup.error.clone() {
                Some(error) => Err(error),
                None => Ok(lookup),
            },
            Err(e) => Err(e.user_message()),
        };

        if self.lookup.resolve(ticket, result).is_stale() {
            return Outcome::stale("person");
        }

        // A pending write keeps its optimistic value until it resolves.
        if self.write.is_none() {
            self.enabled = self
                .lookup
                .ready()
                .and_then(|lookup| lookup.cognito_user.as_ref())
                .and_then(|user| user.enabled);
        }
        if self.enabled.is_none() {
            self.focus = PersonFocus::Input;
        }
        Outcome::none()
    }

    pub fn on_enabled_set(&mut self, ticket: Ticket, result: ApiResult<MessageResponse>) -> Outcome {
        let write = match self.write {
            Some(write) if write.ticket == ticket => write,
            _ => return Outcome::stale("person"),
        };
        self.write = None;

        match result {
            Ok(_) => {
                let verb = if self.enabled == Some(true) {
                    "enabled"
                } else {
                    "disabled"
                };
                let mut outcome = Outcome::info(format!("User {verb}"));
                if let Some(person_id) = self.person_id.clone() {
                    let ticket = self.lookup.begin_refresh();
                    outcome.command = Some(Action::LookupPerson { ticket, person_id });
                }
                outcome
            }
            Err(e) => {
                self.enabled = Some(write.previous);
                Outcome::failure(e.user_message())
            }
        }
    }
}
