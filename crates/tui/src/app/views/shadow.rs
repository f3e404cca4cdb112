//! Device shadow editor.
//!
//! Responsibilities:
//! - Describe every editable shadow key once ([`SHADOW_FIELDS`]); rendering,
//!   seeding and payload building all read the same table.
//! - Hold the local text of each field and the last value seen from the backend.
//! - Build the `desired_state` payload and remember which booleans to restore
//!   if the write fails.
//!
//! Invariants:
//! - The empty string is the "no value" sentinel. Sentinel fields are never sent.
//! - Boolean fields hold `"true"`, `"false"` or the sentinel, and are sent as
//!   JSON booleans.
//! - Integer fields are sent as JSON integers or the submit is refused.

use opsdash_client::models::device::SHADOW_LAST_UPDATED_KEY;
use serde_json::{Map, Value};

use crate::app::input::SingleLineInput;
use crate::resource::Ticket;
use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Integer,
    Boolean,
}

/// Turns local text into the JSON value sent for a field.
pub type Coerce = fn(&'static str, &str) -> Result<Value, ValidationError>;

/// One editable shadow key.
#[derive(Debug, Clone, Copy)]
pub struct ShadowField {
    pub label: &'static str,
    /// Key used by the lookup response (`Latest-Bootloader`).
    pub display_key: &'static str,
    /// Key expected by the update endpoint (`latest-bootloader`).
    pub backend_key: &'static str,
    pub kind: FieldKind,
    pub coerce: Coerce,
}

fn coerce_text(_label: &'static str, value: &str) -> Result<Value, ValidationError> {
    Ok(Value::String(value.trim().to_string()))
}

fn coerce_integer(label: &'static str, value: &str) -> Result<Value, ValidationError> {
    value
        .trim()
        .parse::<i64>()
        .map(Value::from)
        .map_err(|_| ValidationError::InvalidInteger {
            field: label,
            value: value.to_string(),
        })
}

fn coerce_boolean(label: &'static str, value: &str) -> Result<Value, ValidationError> {
    match value.trim() {
        "true" => Ok(Value::Bool(true)),
        "false" => Ok(Value::Bool(false)),
        other => Err(ValidationError::InvalidBoolean {
            field: label,
            value: other.to_string(),
        }),
    }
}

const fn field(
    label: &'static str,
    display_key: &'static str,
    backend_key: &'static str,
    kind: FieldKind,
) -> ShadowField {
    let coerce: Coerce = match kind {
        FieldKind::Text => coerce_text,
        FieldKind::Integer => coerce_integer,
        FieldKind::Boolean => coerce_boolean,
    };
    ShadowField {
        label,
        display_key,
        backend_key,
        kind,
        coerce,
    }
}

pub const SHADOW_FIELDS: [ShadowField; 11] = [
    field("Latest Bootloader", "Latest-Bootloader", "latest-bootloader", FieldKind::Text),
    field("Latest Firmware", "Latest-Firmware", "latest-firmware", FieldKind::Text),
    field("Latest Fallback", "Latest-Fallback", "latest-fallback", FieldKind::Text),
    field("Debug", "Debug", "debug", FieldKind::Boolean),
    field("Heartbeat Interval", "Heartbeat-Interval", "heartbeat-interval", FieldKind::Integer),
    field(
        "Battery Low Threshold",
        "Battery-Low-Threshold",
        "battery-low-threshold",
        FieldKind::Integer,
    ),
    field("Trip Timeout", "Trip-Timeout", "trip-timeout", FieldKind::Integer),
    field("After Trip Reports", "After-Trip-Reports", "after-trip-reports", FieldKind::Integer),
    field("Heartbeat Tod", "Heartbeat-Tod", "heartbeat-tod", FieldKind::Integer),
    field("Heartbeat Enable", "Heartbeat-Enable", "heartbeat-enable", FieldKind::Boolean),
    field("Daily Upload Time", "Daily-Upload-Time", "daily-upload-time", FieldKind::Integer),
];

/// Normalize a shadow value to the editor's text form.
fn seed_value(kind: FieldKind, value: Option<&Value>) -> String {
    let value = match value {
        None | Some(Value::Null) => return String::new(),
        Some(Value::String(s)) if s.trim().is_empty() || s.trim().eq_ignore_ascii_case("null") => {
            return String::new();
        }
        Some(v) => v,
    };

    match kind {
        FieldKind::Boolean => match value {
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => match n.as_i64() {
                Some(0) => "false".to_string(),
                Some(1) => "true".to_string(),
                _ => String::new(),
            },
            Value::String(s) if s.trim().eq_ignore_ascii_case("true") => "true".to_string(),
            Value::String(s) if s.trim().eq_ignore_ascii_case("false") => "false".to_string(),
            _ => String::new(),
        },
        FieldKind::Text | FieldKind::Integer => match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        },
    }
}

#[derive(Debug, Clone)]
struct PendingShadowWrite {
    ticket: Ticket,
    /// Booleans changed since the last sync, with their synced value.
    reverts: Vec<(usize, String)>,
}

/// Local state of the shadow form.
#[derive(Debug, Clone)]
pub struct ShadowEditor {
    inputs: Vec<SingleLineInput>,
    synced: Vec<String>,
    last_updated: Option<String>,
    pending: Option<PendingShadowWrite>,
}

impl Default for ShadowEditor {
    fn default() -> Self {
        Self {
            inputs: SHADOW_FIELDS.iter().map(|_| SingleLineInput::new()).collect(),
            synced: vec![String::new(); SHADOW_FIELDS.len()],
            last_updated: None,
            pending: None,
        }
    }
}

impl ShadowEditor {
    /// Overwrite every field with the backend's view of the shadow.
    pub fn seed(&mut self, shadow: &Map<String, Value>) {
        for (i, field) in SHADOW_FIELDS.iter().enumerate() {
            let raw = shadow
                .get(field.display_key)
                .or_else(|| shadow.get(field.backend_key));
            let text = seed_value(field.kind, raw);
            self.inputs[i].set_value(text.clone());
            self.synced[i] = text;
        }
        self.last_updated = shadow
            .get(SHADOW_LAST_UPDATED_KEY)
            .and_then(Value::as_str)
            .map(str::to_string);
    }

    pub fn value(&self, index: usize) -> &str {
        self.inputs.get(index).map(SingleLineInput::value).unwrap_or("")
    }

    pub fn input(&self, index: usize) -> Option<&SingleLineInput> {
        self.inputs.get(index)
    }

    pub fn input_mut(&mut self, index: usize) -> Option<&mut SingleLineInput> {
        match SHADOW_FIELDS.get(index) {
            Some(field) if field.kind != FieldKind::Boolean => self.inputs.get_mut(index),
            _ => None,
        }
    }

    pub fn last_updated(&self) -> Option<&str> {
        self.last_updated.as_deref()
    }

    /// Whether the field differs from the last synced value.
    pub fn is_dirty(&self, index: usize) -> bool {
        self.synced
            .get(index)
            .is_some_and(|synced| synced != self.value(index))
    }

    /// Current boolean value; the sentinel reads as `None`.
    pub fn flag(&self, index: usize) -> Option<bool> {
        match self.value(index) {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        }
    }

    /// Stage a confirmed boolean edit.
    pub fn set_flag(&mut self, index: usize, value: bool) {
        if SHADOW_FIELDS.get(index).map(|f| f.kind) == Some(FieldKind::Boolean) {
            self.inputs[index].set_value(value.to_string());
        }
    }

    /// Build the `desired_state` map from every non-sentinel field.
    pub fn payload(&self) -> Result<Map<String, Value>, ValidationError> {
        let mut desired = Map::new();
        for (i, field) in SHADOW_FIELDS.iter().enumerate() {
            let text = self.value(i);
            if text.trim().is_empty() {
                continue;
            }
            desired.insert(field.backend_key.to_string(), (field.coerce)(field.label, text)?);
        }
        if desired.is_empty() {
            return Err(ValidationError::EmptyShadowUpdate);
        }
        Ok(desired)
    }

    pub fn is_saving(&self) -> bool {
        self.pending.is_some()
    }

    /// Record an outgoing write so a failure can undo its toggles.
    pub fn begin_write(&mut self, ticket: Ticket) {
        let reverts = SHADOW_FIELDS
            .iter()
            .enumerate()
            .filter(|(i, f)| f.kind == FieldKind::Boolean && self.is_dirty(*i))
            .map(|(i, _)| (i, self.synced[i].clone()))
            .collect();
        self.pending = Some(PendingShadowWrite { ticket, reverts });
    }

    /// Finish the write for `ticket`. Returns `false` if it is not the one pending.
    pub fn finish_write(&mut self, ticket: Ticket, succeeded: bool) -> bool {
        let pending = match &self.pending {
            Some(p) if p.ticket == ticket => p.clone(),
            _ => return false,
        };
        self.pending = None;
        if !succeeded {
            for (index, previous) in pending.reverts {
                self.inputs[index].set_value(previous);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use serde_json::json;

    fn shadow(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    fn index_of(key: &str) -> usize {
        SHADOW_FIELDS
            .iter()
            .position(|f| f.backend_key == key)
            .unwrap()
    }

    #[test]
    fn test_seed_normalizes_values() {
        let mut editor = ShadowEditor::default();
        editor.seed(&shadow(json!({
            "Last Updated": "2024-05-01 10:00:00",
            "Latest-Bootloader": "Null",
            "Latest-Firmware": "2.4.1",
            "Debug": 1,
            "Heartbeat-Interval": 3600,
            "heartbeat-enable": "FALSE",
            "Trip-Timeout": null
        })));

        assert_eq!(editor.value(index_of("latest-bootloader")), "");
        assert_eq!(editor.value(index_of("latest-firmware")), "2.4.1");
        assert_eq!(editor.value(index_of("debug")), "true");
        assert_eq!(editor.value(index_of("heartbeat-interval")), "3600");
        assert_eq!(editor.value(index_of("heartbeat-enable")), "false");
        assert_eq!(editor.value(index_of("trip-timeout")), "");
        assert_eq!(editor.last_updated(), Some("2024-05-01 10:00:00"));
    }

    #[test]
    fn test_payload_skips_sentinel_and_types_values() {
        let mut editor = ShadowEditor::default();
        editor.seed(&shadow(json!({
            "Debug": false,
            "Heartbeat-Interval": "900",
            "Latest-Firmware": "2.4.1"
        })));

        let payload = editor.payload().unwrap();
        assert_eq!(
            Value::Object(payload),
            json!({"debug": false, "heartbeat-interval": 900, "latest-firmware": "2.4.1"})
        );
    }

    #[test]
    fn test_bad_integer_names_field() {
        let mut editor = ShadowEditor::default();
        let i = index_of("trip-timeout");
        editor.input_mut(i).unwrap().set_value("ten");
        assert_eq!(
            editor.payload(),
            Err(ValidationError::InvalidInteger {
                field: "Trip Timeout",
                value: "ten".into()
            })
        );
    }

    #[test]
    fn test_all_sentinel_payload_is_rejected() {
        let editor = ShadowEditor::default();
        assert_eq!(editor.payload(), Err(ValidationError::EmptyShadowUpdate));
    }

    #[test]
    fn test_boolean_fields_are_not_typed_into() {
        let mut editor = ShadowEditor::default();
        assert!(editor.input_mut(index_of("debug")).is_none());
    }

    #[test]
    fn test_failed_write_reverts_only_toggles() {
        let mut editor = ShadowEditor::default();
        editor.seed(&shadow(json!({"Debug": false, "Heartbeat-Interval": 60})));
        let debug = index_of("debug");
        let interval = index_of("heartbeat-interval");

        editor.set_flag(debug, true);
        editor.input_mut(interval).unwrap().set_value("120");
        let ticket = Ticket::next();
        editor.begin_write(ticket);

        assert!(!editor.finish_write(Ticket::next(), false));
        assert!(editor.finish_write(ticket, false));
        assert_eq!(editor.value(debug), "false");
        assert_eq!(editor.value(interval), "120");
        assert!(!editor.is_saving());
    }

    fn local_value(kind: FieldKind) -> BoxedStrategy<String> {
        match kind {
            FieldKind::Boolean => prop_oneof![
                Just(String::new()),
                Just("true".to_string()),
                Just("false".to_string())
            ]
            .boxed(),
            FieldKind::Integer => prop_oneof![
                Just(String::new()),
                any::<i32>().prop_map(|n| n.to_string())
            ]
            .boxed(),
            FieldKind::Text => prop_oneof![Just(String::new()), "[a-z0-9.]{1,8}"].boxed(),
        }
    }

    fn local_values() -> impl Strategy<Value = Vec<String>> {
        SHADOW_FIELDS
            .iter()
            .map(|f| local_value(f.kind))
            .collect::<Vec<_>>()
    }

    proptest! {
        #[test]
        fn prop_payload_matches_non_sentinel_fields(values in local_values()) {
            let mut editor = ShadowEditor::default();
            for (i, value) in values.iter().enumerate() {
                match SHADOW_FIELDS[i].kind {
                    FieldKind::Boolean if !value.is_empty() => editor.set_flag(i, value == "true"),
                    FieldKind::Boolean => {}
                    _ => editor.input_mut(i).unwrap().set_value(value.clone()),
                }
            }

            match editor.payload() {
                Err(ValidationError::EmptyShadowUpdate) => {
                    prop_assert!(values.iter().all(String::is_empty));
                }
                Err(other) => prop_assert!(false, "unexpected error {other:?}"),
                Ok(payload) => {
                    for (i, field) in SHADOW_FIELDS.iter().enumerate() {
                        let sent = payload.get(field.backend_key);
                        prop_assert_eq!(sent.is_some(), !values[i].is_empty());
                        if let Some(sent) = sent {
                            match field.kind {
                                FieldKind::Boolean => prop_assert!(sent.is_boolean()),
                                FieldKind::Integer => prop_assert!(sent.is_i64()),
                                FieldKind::Text => prop_assert!(sent.is_string()),
                            }
                        }
                    }
                }
            }
        }
    }
}
