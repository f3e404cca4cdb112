//! Redaction wrapper for Action logging.
//!
//! `RedactedAction` implements `Debug` so that person IDs, search terms and
//! response bodies never reach the log file, and binary payloads show up as
//! sizes instead of byte dumps. Always log actions as
//! `?RedactedAction(&action)`, never `?action`.
//!
//! # Invariants
//!
//! - Variants carrying user-entered identifiers or response data are handled explicitly.
//! - Errors are logged by kind and status only; backend messages may echo input.
//! - Simple variants fall through to a short name.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use opsdash_client::ClientError;

use crate::action::variants::Action;

/// Length plus a short hash, enough to correlate log lines without the value.
fn redact(value: &str) -> String {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    format!("<{} chars, hash={:08x}>", value.len(), hasher.finish() as u32)
}

fn outcome<T>(result: &Result<T, Arc<ClientError>>, ok: impl FnOnce(&T) -> String) -> String {
    match result {
        Ok(value) => ok(value),
        Err(e) => match e.status() {
            Some(status) => format!("<error status={status}>"),
            None if e.is_transport() => "<transport error>".to_string(),
            None => "<error>".to_string(),
        },
    }
}

pub struct RedactedAction<'a>(pub &'a Action);

impl std::fmt::Debug for RedactedAction<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Action::Input(_) => write!(f, "Input(<key>)"),
            Action::Mouse(_) => write!(f, "Mouse"),
            Action::LookupPerson { ticket, person_id } => {
                write!(f, "LookupPerson({ticket}, {})", redact(person_id))
            }
            Action::SetPersonEnabled {
                ticket,
                person_id,
                enabled,
            } => write!(
                f,
                "SetPersonEnabled({ticket}, {}, enabled={enabled})",
                redact(person_id)
            ),
            Action::LookupDevice { ticket, iccid } => {
                write!(f, "LookupDevice({ticket}, {})", redact(iccid))
            }
            Action::UpdateShadow {
                ticket,
                iccid,
                desired_state,
            } => {
                let keys: Vec<&str> = desired_state.keys().map(String::as_str).collect();
                write!(f, "UpdateShadow({ticket}, {}, keys={keys:?})", redact(iccid))
            }
            Action::SearchLogs { ticket, request } => write!(
                f,
                "SearchLogs({ticket}, handler={}, term={})",
                request.handler,
                redact(&request.search_term)
            ),
            Action::SaveFile {
                ticket,
                origin,
                file_name,
                bytes,
                ..
            } => write!(
                f,
                "SaveFile({ticket}, {origin:?}, {file_name}, <{} bytes>)",
                bytes.len()
            ),
            Action::PersonLoaded { ticket, result } => write!(
                f,
                "PersonLoaded({ticket}, {})",
                outcome(result, |_| "<person>".to_string())
            ),
            Action::PersonEnabledSet { ticket, result } => write!(
                f,
                "PersonEnabledSet({ticket}, {})",
                outcome(result, |_| "ok".to_string())
            ),
            Action::DeviceLoaded { ticket, result } => write!(
                f,
                "DeviceLoaded({ticket}, {})",
                outcome(result, |d| format!("<device, {} warning(s)>", d.errors.len()))
            ),
            Action::ShadowUpdated { ticket, result } => write!(
                f,
                "ShadowUpdated({ticket}, {})",
                outcome(result, |_| "ok".to_string())
            ),
            Action::LogsLoaded { ticket, result } => write!(
                f,
                "LogsLoaded({ticket}, {})",
                outcome(result, |rows| format!("<{} rows>", rows.len()))
            ),
            Action::ObjectsListed { ticket, result } => write!(
                f,
                "ObjectsListed({ticket}, {})",
                outcome(result, |entries| format!("<{} entries>", entries.len()))
            ),
            Action::ObjectFetched { ticket, result } => write!(
                f,
                "ObjectFetched({ticket}, {})",
                outcome(result, |o| format!("<{} chars of content>", o.content.len()))
            ),
            Action::CsvSplit { ticket, result } => write!(
                f,
                "CsvSplit({ticket}, {})",
                outcome(result, |s| format!("<{} bytes>", s.bytes.len()))
            ),
            Action::LabelsLoaded { ticket, day, result } => write!(
                f,
                "LabelsLoaded({ticket}, {day:?}, {})",
                outcome(result, |o| format!("<{} chars>", o.output.len()))
            ),
            Action::ModemFailedCountLoaded { ticket, result } => write!(
                f,
                "ModemFailedCountLoaded({ticket}, {})",
                outcome(result, |_| "<report>".to_string())
            ),
            other => write!(f, "{other:?}"),
        }
    }
}
