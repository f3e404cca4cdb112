//! Application state types and enums.
//!
//! Responsibilities:
//! - Define screen navigation enum (CurrentScreen)
//! - Define backend health enum (HealthState)
//!
//! Does NOT handle:
//! - State mutations (in App impl)

use opsdash_client::HealthStatus;

/// Backend reachability shown in the header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HealthState {
    /// Probe not answered yet.
    #[default]
    Checking,
    Healthy,
    /// Backend answered with something other than "ok".
    Degraded,
    Unreachable,
}

impl HealthState {
    pub fn from_status(status: &HealthStatus) -> Self {
        match status.status.to_ascii_lowercase().as_str() {
            "ok" | "healthy" => HealthState::Healthy,
            _ => HealthState::Degraded,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            HealthState::Checking => "checking",
            HealthState::Healthy => "ok",
            HealthState::Degraded => "degraded",
            HealthState::Unreachable => "unreachable",
        }
    }
}

/// Layout constants for UI components.
pub const HEADER_HEIGHT: u16 = 3;
pub const FOOTER_HEIGHT: u16 = 1;

/// Current active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CurrentScreen {
    #[default]
    Person,
    Device,
    Logs,
    S3,
    CsvSplit,
    Labels,
    Tools,
}

impl CurrentScreen {
    /// Tab order.
    pub const ALL: [CurrentScreen; 7] = [
        CurrentScreen::Person,
        CurrentScreen::Device,
        CurrentScreen::Logs,
        CurrentScreen::S3,
        CurrentScreen::CsvSplit,
        CurrentScreen::Labels,
        CurrentScreen::Tools,
    ];

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Returns the next screen in cyclic navigation order.
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Returns the previous screen in cyclic navigation order.
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Screen bound to a digit key (`'1'` is the first tab).
    pub fn from_digit(c: char) -> Option<Self> {
        let n = c.to_digit(10)? as usize;
        n.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    pub fn title(self) -> &'static str {
        match self {
            CurrentScreen::Person => "Person",
            CurrentScreen::Device => "Device",
            CurrentScreen::Logs => "Logs",
            CurrentScreen::S3 => "S3",
            CurrentScreen::CsvSplit => "CSV Split",
            CurrentScreen::Labels => "Labels",
            CurrentScreen::Tools => "Tools",
        }
    }
}
