//! Action enum definitions for the TUI event system.
//!
//! # Action Categories
//!
//! - **System**: quit, ticks, terminal input and resize
//! - **Navigation**: tab switching and help
//! - **Commands**: requests for the runtime to call the backend or touch the
//!   filesystem; each carries the [`Ticket`] its view is waiting on
//! - **Results**: answers to commands, routed back to the issuing view
//!
//! # What This Module Does NOT Handle
//!
//! - Action handling logic (see `App::update`)
//! - Async task execution (see `runtime::side_effects`)

use std::num::NonZeroU64;
use std::path::PathBuf;
use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use opsdash_client::{
    ClientError, DeviceLookup, HealthStatus, LabelDay, LabelsOutput, LogEntry, LogSearchRequest,
    MessageResponse, PersonLookup, S3Entry, S3Object, SplitArchive, ToolReport,
};
use serde_json::{Map, Value};

use crate::app::CurrentScreen;
use crate::resource::Ticket;

/// Result type carried by backend answers.
pub type ApiResult<T> = Result<T, Arc<ClientError>>;

/// A downloaded split archive and what we could learn from it locally.
#[derive(Clone)]
pub struct SplitOutcome {
    /// Basename suggested by the server, or the fallback name.
    pub file_name: String,
    pub bytes: Arc<Vec<u8>>,
    /// Entries in the zip, or `None` if it could not be read.
    pub entries: Option<usize>,
}

impl SplitOutcome {
    pub fn new(archive: SplitArchive, entries: Option<usize>) -> Self {
        Self {
            file_name: archive.file_name,
            bytes: Arc::new(archive.bytes),
            entries,
        }
    }
}

impl std::fmt::Debug for SplitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SplitOutcome")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .field("entries", &self.entries)
            .finish()
    }
}

/// Where a save request came from, so the answer reaches the right view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOrigin {
    Preview,
    Archive,
}

/// Unified action type for user input, commands and async results.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    Quit,
    Tick,
    Input(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    // Navigation
    NextScreen,
    PreviousScreen,
    SwitchTo(CurrentScreen),
    OpenHelp,

    // Commands
    CheckHealth,
    LookupPerson {
        ticket: Ticket,
        person_id: String,
    },
    SetPersonEnabled {
        ticket: Ticket,
        person_id: String,
        enabled: bool,
    },
    LookupDevice {
        ticket: Ticket,
        iccid: String,
    },
    UpdateShadow {
        ticket: Ticket,
        iccid: String,
        desired_state: Map<String, Value>,
    },
    LoadProfiles {
        ticket: Ticket,
    },
    LoadHandlers {
        ticket: Ticket,
        profile: String,
    },
    SearchLogs {
        ticket: Ticket,
        request: LogSearchRequest,
    },
    ListObjects {
        ticket: Ticket,
        bucket: String,
        prefix: String,
    },
    FetchObject {
        ticket: Ticket,
        bucket: String,
        key: String,
    },
    InspectCsv {
        ticket: Ticket,
        path: PathBuf,
    },
    SplitCsv {
        ticket: Ticket,
        path: PathBuf,
        rows_per_chunk: NonZeroU64,
    },
    SaveFile {
        ticket: Ticket,
        origin: SaveOrigin,
        dir: PathBuf,
        file_name: String,
        bytes: Arc<Vec<u8>>,
    },
    LoadLabels {
        ticket: Ticket,
        day: LabelDay,
    },
    LoadModemFailedCount {
        ticket: Ticket,
    },

    // Results
    HealthChecked(ApiResult<HealthStatus>),
    PersonLoaded {
        ticket: Ticket,
        result: ApiResult<PersonLookup>,
    },
    PersonEnabledSet {
        ticket: Ticket,
        result: ApiResult<MessageResponse>,
    },
    DeviceLoaded {
        ticket: Ticket,
        result: ApiResult<DeviceLookup>,
    },
    ShadowUpdated {
        ticket: Ticket,
        result: ApiResult<MessageResponse>,
    },
    ProfilesLoaded {
        ticket: Ticket,
        result: ApiResult<Vec<String>>,
    },
    HandlersLoaded {
        ticket: Ticket,
        result: ApiResult<Vec<String>>,
    },
    LogsLoaded {
        ticket: Ticket,
        result: ApiResult<Vec<LogEntry>>,
    },
    ObjectsListed {
        ticket: Ticket,
        result: ApiResult<Vec<S3Entry>>,
    },
    ObjectFetched {
        ticket: Ticket,
        result: ApiResult<S3Object>,
    },
    CsvInspected {
        ticket: Ticket,
        result: Result<u64, String>,
    },
    CsvSplit {
        ticket: Ticket,
        result: ApiResult<SplitOutcome>,
    },
    FileSaved {
        ticket: Ticket,
        origin: SaveOrigin,
        result: Result<PathBuf, String>,
    },
    LabelsLoaded {
        ticket: Ticket,
        day: LabelDay,
        result: ApiResult<LabelsOutput>,
    },
    ModemFailedCountLoaded {
        ticket: Ticket,
        result: ApiResult<ToolReport>,
    },
}

impl Action {
    /// Whether the runtime must do work for this action.
    pub fn is_command(&self) -> bool {
        matches!(
            self,
            Action::CheckHealth
                | Action::LookupPerson { .. }
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
                | Action::LoadModemFailedCount { .. }
        )
    }
}
