//! CloudWatch log search form.
//!
//! Responsibilities:
//! - Load AWS profiles on entry, then the handler list for the selected
//!   profile (a dependent fetch with its own indicator).
//! - Validate the search form and issue the search.
//!
//! Invariants:
//! - Changing the profile clears the handler selection and refetches handlers.
//! - A failed handler fetch is shown inline and never clears the form.

use chrono::{DateTime, Local, LocalResult, NaiveDateTime, TimeZone, Utc};
use crossterm::event::{KeyCode, KeyEvent};
use opsdash_client::{LogEntry, LogSearchRequest};
use opsdash_config::SearchConfig;

use crate::action::{Action, ApiResult};
use crate::app::input::SingleLineInput;
use crate::app::views::{Outcome, step_focus};
use crate::resource::{RemoteResource, Ticket};
use crate::validation::ValidationError;

/// Format used to prefill the time window.
pub const DATETIME_INPUT_FORMAT: &str = "%Y-%m-%d %H:%M";

const ACCEPTED_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse a local datetime typed by the user.
pub fn parse_datetime(field: &'static str, value: &str) -> Result<NaiveDateTime, ValidationError> {
    let trimmed = value.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| ValidationError::InvalidDateTime {
            field,
            value: value.to_string(),
        })
}

/// Parse a datetime typed in the local zone and pin it to an instant.
pub fn parse_local_instant(
    field: &'static str,
    value: &str,
) -> Result<DateTime<Utc>, ValidationError> {
    let naive = parse_datetime(field, value)?;
    single_instant(field, value, Local.from_local_datetime(&naive))
}

/// A wall-clock time skipped or repeated by a DST change has no single
/// instant and is rejected rather than guessed.
fn single_instant<Tz: TimeZone>(
    field: &'static str,
    value: &str,
    resolved: LocalResult<DateTime<Tz>>,
) -> Result<DateTime<Utc>, ValidationError> {
    match resolved {
        LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
        LocalResult::Ambiguous(..) | LocalResult::None => {
            Err(ValidationError::AmbiguousLocalTime {
                field,
                value: value.trim().to_string(),
            })
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogsFocus {
    #[default]
    Profile,
    Handler,
    SearchTerm,
    Start,
    End,
    Submit,
}

impl LogsFocus {
    const ORDER: [LogsFocus; 6] = [
        LogsFocus::Profile,
        LogsFocus::Handler,
        LogsFocus::SearchTerm,
        LogsFocus::Start,
        LogsFocus::End,
        LogsFocus::Submit,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug)]
pub struct LogsView {
    pub focus: LogsFocus,
    pub profiles: RemoteResource<Vec<String>>,
    pub handlers: RemoteResource<Vec<String>>,
    pub profile: Option<usize>,
    pub handler: Option<usize>,
    pub search_term: SingleLineInput,
    pub start: SingleLineInput,
    pub end: SingleLineInput,
    pub results: RemoteResource<Vec<LogEntry>>,
    pub scroll: usize,
}

impl LogsView {
    pub fn new(config: &SearchConfig) -> Self {
        let now = Local::now().naive_local();
        let window = chrono::Duration::from_std(config.window)
            .unwrap_or_else(|_| chrono::Duration::minutes(60));
        Self {
            focus: LogsFocus::Profile,
            profiles: RemoteResource::new(),
            handlers: RemoteResource::new(),
            profile: None,
            handler: None,
            search_term: SingleLineInput::with_placeholder("ICCID, person ID, request ID..."),
            start: SingleLineInput::with_value((now - window).format(DATETIME_INPUT_FORMAT).to_string()),
            end: SingleLineInput::with_value(now.format(DATETIME_INPUT_FORMAT).to_string()),
            results: RemoteResource::new(),
            scroll: 0,
        }
    }

    /// Load the profile list when the tab is opened.
    pub fn enter(&mut self) -> Outcome {
        let ticket = self.profiles.begin();
        Outcome::command(Action::LoadProfiles { ticket })
    }

    pub fn selected_profile(&self) -> Option<&str> {
        let index = self.profile?;
        self.profiles.ready()?.get(index).map(String::as_str)
    }

    pub fn selected_handler(&self) -> Option<&str> {
        let index = self.handler?;
        self.handlers.ready()?.get(index).map(String::as_str)
    }

    pub fn captures_text(&self) -> bool {
        matches!(
            self.focus,
            LogsFocus::SearchTerm | LogsFocus::Start | LogsFocus::End
        )
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        if let Some(next) = step_focus(self.focus.index(), LogsFocus::ORDER.len(), &key) {
            self.focus = LogsFocus::ORDER[next];
            return Outcome::none();
        }

        match key.code {
            KeyCode::PageDown => {
                let len = self.results.ready().map_or(0, Vec::len);
                self.scroll = (self.scroll + 10).min(len.saturating_sub(1));
                return Outcome::none();
            }
            KeyCode::PageUp => {
                self.scroll = self.scroll.saturating_sub(10);
                return Outcome::none();
            }
            _ => {}
        }

        match self.focus {
            LogsFocus::Profile => match key.code {
                KeyCode::Left | KeyCode::Right => {
                    let count = self.profiles.ready().map_or(0, Vec::len);
                    match cycle(self.profile, count, key.code == KeyCode::Right) {
                        Some(next) if Some(next) != self.profile => self.select_profile(next),
                        _ => Outcome::none(),
                    }
                }
                KeyCode::Enter => {
                    self.focus = LogsFocus::Handler;
                    Outcome::none()
                }
                _ => Outcome::none(),
            },
            LogsFocus::Handler => match key.code {
                KeyCode::Left | KeyCode::Right => {
                    let count = self.handlers.ready().map_or(0, Vec::len);
                    self.handler = cycle(self.handler, count, key.code == KeyCode::Right);
                    Outcome::none()
                }
                KeyCode::Enter => {
                    self.focus = LogsFocus::SearchTerm;
                    Outcome::none()
                }
                _ => Outcome::none(),
            },
            LogsFocus::SearchTerm | LogsFocus::Start | LogsFocus::End => {
                if key.code == KeyCode::Enter {
                    return self.submit();
                }
                let input = match self.focus {
                    LogsFocus::SearchTerm => &mut self.search_term,
                    LogsFocus::Start => &mut self.start,
                    _ => &mut self.end,
                };
                input.handle_key(key);
                Outcome::none()
            }
            LogsFocus::Submit => match key.code {
                KeyCode::Enter => self.submit(),
                _ => Outcome::none(),
            },
        }
    }

    fn select_profile(&mut self, index: usize) -> Outcome {
        let Some(profile) = self
            .profiles
            .ready()
            .and_then(|p| p.get(index))
            .cloned()
        else {
            return Outcome::none();
        };
        self.profile = Some(index);
        self.handler = None;
        let ticket = self.handlers.begin();
        Outcome::command(Action::LoadHandlers { ticket, profile })
    }

    fn submit(&mut self) -> Outcome {
        if self.results.is_loading() {
            return Outcome::none();
        }
        match self.build_request() {
            Ok(request) => {
                let ticket = self.results.begin();
                self.scroll = 0;
                Outcome::command(Action::SearchLogs { ticket, request })
            }
            Err(e) => Outcome::invalid(e),
        }
    }

    fn build_request(&self) -> Result<LogSearchRequest, ValidationError> {
        let profile = self
            .selected_profile()
            .ok_or(ValidationError::MissingProfile)?
            .to_string();
        let handler = self
            .selected_handler()
            .ok_or(ValidationError::MissingHandler)?
            .to_string();
        let search_term = self.search_term.value().trim().to_string();
        if search_term.is_empty() {
            return Err(ValidationError::MissingSearchTerm);
        }
        let start_time = parse_local_instant("Start time", self.start.value())?;
        let end_time = parse_local_instant("End time", self.end.value())?;
        if start_time >= end_time {
            return Err(ValidationError::EmptyTimeWindow);
        }
        Ok(LogSearchRequest {
            profile,
            handler,
            search_term,
            start_time,
            end_time,
        })
    }

    pub fn on_profiles(&mut self, ticket: Ticket, result: ApiResult<Vec<String>>) -> Outcome {
        if self
            .profiles
            .resolve(ticket, result.map_err(|e| e.user_message()))
            .is_stale()
        {
            return Outcome::stale("logs");
        }
        self.profile = None;
        match self.profiles.ready() {
            Some(profiles) if !profiles.is_empty() => self.select_profile(0),
            _ => Outcome::none(),
        }
    }

    pub fn on_handlers(&mut self, ticket: Ticket, result: ApiResult<Vec<String>>) -> Outcome {
        if self
            .handlers
            .resolve(ticket, result.map_err(|e| e.user_message()))
            .is_stale()
        {
            return Outcome::stale("logs");
        }
        self.handler = match self.handlers.ready() {
            Some(handlers) if !handlers.is_empty() => Some(0),
            _ => None,
        };
        Outcome::none()
    }

    pub fn on_results(&mut self, ticket: Ticket, result: ApiResult<Vec<LogEntry>>) -> Outcome {
        if self
            .results
            .resolve(ticket, result.map_err(|e| e.user_message()))
            .is_stale()
        {
            return Outcome::stale("logs");
        }
        match self.results.ready() {
            Some(rows) => Outcome::info(format!("{} log entries", rows.len())),
            None => Outcome::none(),
        }
    }
}

/// Step a selection left or right through `count` options, wrapping.
fn cycle(current: Option<usize>, count: usize, forward: bool) -> Option<usize> {
    if count == 0 {
        return None;
    }
    Some(match (current, forward) {
        (None, _) => 0,
        (Some(i), true) => (i + 1) % count,
        (Some(i), false) => (i + count - 1) % count,
    })
}
