//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Route backend results to the view that issued the request
//! - Apply view outcomes: notices, confirmations and follow-up commands
//!
//! Non-responsibilities:
//! - Does NOT perform async operations (see `runtime::side_effects`)
//!
//! Invariants:
//! - `update` is the only place app state changes.
//! - A declined confirmation returns no command, so nothing reaches the network.

use crossterm::event::KeyEvent;

use crate::action::{Action, RedactedAction, SaveOrigin};
use crate::app::App;
use crate::app::state::{CurrentScreen, HealthState};
use crate::app::views::{Notice, Outcome};
use crate::confirm::{ConfirmDecision, ConfirmRequest};
use crate::ui::{Popup, StatusMessage};

impl App {
    /// Pure state mutation based on Action.
    ///
    /// Returns a follow-up action (usually a command for the runtime) when
    /// handling this one produced one.
    pub fn update(&mut self, action: Action) -> Option<Action> {
        tracing::trace!(action = ?RedactedAction(&action), "update");
        match action {
            Action::Quit | Action::Resize(..) => None,
            Action::Tick => {
                self.spinner_frame = self.spinner_frame.wrapping_add(1);
                None
            }
            Action::Input(key) => self.on_key(key),
            Action::Mouse(mouse) => self.handle_mouse(mouse),

            Action::NextScreen => self.switch_to(self.current_screen.next()),
            Action::PreviousScreen => self.switch_to(self.current_screen.previous()),
            Action::SwitchTo(screen) => self.switch_to(screen),
            Action::OpenHelp => {
                self.popup = Some(Popup::help());
                None
            }

            Action::CheckHealth => {
                self.health = HealthState::Checking;
                None
            }
            // Loading state was set by the view that issued the command.
            Action::LookupPerson { .. }
            | Action::SetPersonEnabled { .. }
            | Action::LookupDevice { .. }
            | Action::UpdateShadow { .. }
            | Action::LoadProfiles { .. }
            | Action::LoadHandlers { .. }
            | Action::SearchLogs { .. }
            | Action::ListObjects { .. }
            | Action::FetchObject { .. }
            | Action::InspectCsv { .. }
            | Action::SplitCsv { .. }
            | Action::SaveFile { .. }
            | Action::LoadLabels { .. }
            | Action::LoadModemFailedCount { .. } => None,

            Action::HealthChecked(result) => {
                self.health = match &result {
                    Ok(status) => HealthState::from_status(status),
                    Err(e) => {
                        tracing::warn!(error = %e, "Backend health check failed");
                        HealthState::Unreachable
                    }
                };
                None
            }
            Action::PersonLoaded { ticket, result } => {
                let outcome = self.person.on_lookup(ticket, result);
                self.apply_outcome(outcome)
            }
            Action::PersonEnabledSet { ticket, result } => {
                let outcome = self.person.on_enabled_set(ticket, result);
                self.apply_outcome(outcome)
            }
            Action::DeviceLoaded { ticket, result } => {
                let outcome = self.device.on_lookup(ticket, result);
                self.apply_outcome(outcome)
            }
            Action::ShadowUpdated { ticket, result } => {
                let outcome = self.device.on_shadow_updated(ticket, result);
                self.apply_outcome(outcome)
            }
            Action::ProfilesLoaded { ticket, result } => {
                let outcome = self.logs.on_profiles(ticket, result);
                self.apply_outcome(outcome)
            }
            Action::HandlersLoaded { ticket, result } => {
                let outcome = self.logs.on_handlers(ticket, result);
                self.apply_outcome(outcome)
            }
            Action::LogsLoaded { ticket, result } => {
                let outcome = self.logs.on_results(ticket, result);
                self.apply_outcome(outcome)
            }
            Action::ObjectsListed { ticket, result } => {
                let outcome = self.browser.on_listing(ticket, result);
                self.apply_outcome(outcome)
            }
            Action::ObjectFetched { ticket, result } => {
                let outcome = self.browser.on_object(ticket, result);
                self.apply_outcome(outcome)
            }
            Action::CsvInspected { ticket, result } => {
                let outcome = self.batch.on_inspected(ticket, result);
                self.apply_outcome(outcome)
            }
            Action::CsvSplit { ticket, result } => {
                let outcome = self.batch.on_split(ticket, result);
                self.apply_outcome(outcome)
            }
            Action::FileSaved {
                ticket,
                origin,
                result,
            } => {
                let outcome = match origin {
                    SaveOrigin::Preview => self.browser.on_saved(ticket, result),
                    SaveOrigin::Archive => self.batch.on_saved(ticket, result),
                };
                self.apply_outcome(outcome)
            }
            Action::LabelsLoaded {
                ticket,
                day,
                result,
            } => {
                let outcome = self.labels.on_labels(ticket, day, result);
                self.apply_outcome(outcome)
            }
            Action::ModemFailedCountLoaded { ticket, result } => {
                let outcome = self.tools.on_report(ticket, result);
                self.apply_outcome(outcome)
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Option<Action> {
        if self.popup.is_some() {
            return self.handle_popup_input(key);
        }
        let outcome = match self.current_screen {
            CurrentScreen::Person => self.person.handle_key(key),
            CurrentScreen::Device => self.device.handle_key(key),
            CurrentScreen::Logs => self.logs.handle_key(key),
            CurrentScreen::S3 => self.browser.handle_key(key),
            CurrentScreen::CsvSplit => self.batch.handle_key(key),
            CurrentScreen::Labels => self.labels.handle_key(key),
            CurrentScreen::Tools => self.tools.handle_key(key),
        };
        self.apply_outcome(outcome)
    }

    /// Apply what a view asked for and return its command, if any.
    pub(crate) fn apply_outcome(&mut self, outcome: Outcome) -> Option<Action> {
        let Outcome {
            command,
            confirm,
            notice,
            stale,
        } = outcome;

        if let Some(view) = stale {
            tracing::debug!(view, "Dropped stale result");
            if let Some(metrics) = &self.metrics {
                metrics.record_stale_result(view);
            }
        }

        match notice {
            Some(Notice::Info(message)) => self.status = Some(StatusMessage::info(message)),
            Some(Notice::Invalid(error)) => {
                self.status = Some(StatusMessage::warning(error.to_string()));
            }
            Some(Notice::Failure(message)) => {
                tracing::warn!(%message, "Operation failed");
                self.status = Some(StatusMessage::error(message.clone()));
                if self.popup.is_none() {
                    self.popup = Some(Popup::error(message));
                }
            }
            None => {}
        }

        if let Some(request) = confirm {
            return match self.confirmation.confirm(&request.prompt()) {
                ConfirmDecision::Approved => self.resolve_confirmation(request, true),
                ConfirmDecision::Declined => self.resolve_confirmation(request, false),
                ConfirmDecision::Deferred => {
                    self.popup = Some(Popup::confirm(request));
                    None
                }
            };
        }

        command
    }

    /// Act on the user's answer to a confirmation.
    pub(crate) fn resolve_confirmation(
        &mut self,
        request: ConfirmRequest,
        approved: bool,
    ) -> Option<Action> {
        if !approved {
            tracing::debug!(?request, "Confirmation declined");
            self.status = Some(StatusMessage::info("Cancelled"));
            return None;
        }
        let outcome = match request {
            ConfirmRequest::PersonEnabled { enabled } => self.person.apply_toggle(enabled),
            ConfirmRequest::ShadowFlag { field, value, .. } => self.device.apply_flag(field, value),
        };
        self.apply_outcome(outcome)
    }
}
