//! ICCID lookup and shadow editing.
//!
//! Responsibilities:
//! - Validate an ICCID and look the device up.
//! - Drive the [`ShadowEditor`]: boolean toggles behind confirmation, submit,
//!   refetch on success, revert toggles on failure.
//!
//! Does NOT handle:
//! - Field descriptors or payload coercion (see `views::shadow`).

use crossterm::event::{KeyCode, KeyEvent};
use opsdash_client::{DeviceLookup, MessageResponse, is_valid_iccid};

use crate::action::{Action, ApiResult};
use crate::app::input::SingleLineInput;
use crate::app::views::shadow::{FieldKind, SHADOW_FIELDS, ShadowEditor};
use crate::app::views::{Outcome, step_focus};
use crate::confirm::ConfirmRequest;
use crate::resource::{RemoteResource, Ticket};
use crate::validation::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceFocus {
    #[default]
    Iccid,
    Field(usize),
    Submit,
}

impl DeviceFocus {
    fn index(self) -> usize {
        match self {
            DeviceFocus::Iccid => 0,
            DeviceFocus::Field(i) => i + 1,
            DeviceFocus::Submit => SHADOW_FIELDS.len() + 1,
        }
    }

    fn from_index(index: usize) -> Self {
        match index {
            0 => DeviceFocus::Iccid,
            i if i <= SHADOW_FIELDS.len() => DeviceFocus::Field(i - 1),
            _ => DeviceFocus::Submit,
        }
    }
}

#[derive(Debug, Default)]
pub struct DeviceView {
    pub input: SingleLineInput,
    pub focus: DeviceFocus,
    pub lookup: RemoteResource<DeviceLookup>,
    pub shadow: ShadowEditor,
    iccid: Option<String>,
}

impl DeviceView {
    pub fn new() -> Self {
        Self {
            input: SingleLineInput::with_placeholder("19-20 digit ICCID"),
            ..Self::default()
        }
    }

    /// Whether the loaded device has a shadow to edit.
    pub fn has_shadow(&self) -> bool {
        self.lookup.ready().is_some_and(|d| d.shadow().is_some())
    }

    pub fn captures_text(&self) -> bool {
        match self.focus {
            DeviceFocus::Iccid => true,
            DeviceFocus::Field(i) => SHADOW_FIELDS[i].kind != FieldKind::Boolean,
            DeviceFocus::Submit => false,
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Outcome {
        let stops = if self.has_shadow() {
            SHADOW_FIELDS.len() + 2
        } else {
            1
        };
        if let Some(next) = step_focus(self.focus.index(), stops, &key) {
            self.focus = DeviceFocus::from_index(next);
            return Outcome::none();
        }

        match (self.focus, key.code) {
            (DeviceFocus::Iccid, KeyCode::Enter) => self.submit_lookup(),
            (DeviceFocus::Iccid, _) => {
                self.input.handle_key(key);
                Outcome::none()
            }
            (DeviceFocus::Field(i), KeyCode::Enter | KeyCode::Char(' '))
                if SHADOW_FIELDS[i].kind == FieldKind::Boolean =>
            {
                self.request_flag(i)
            }
            (DeviceFocus::Field(i), KeyCode::Enter) => {
                self.focus = DeviceFocus::from_index(i + 2);
                Outcome::none()
            }
            (DeviceFocus::Field(i), _) => {
                if let Some(input) = self.shadow.input_mut(i) {
                    input.handle_key(key);
                }
                Outcome::none()
            }
            (DeviceFocus::Submit, KeyCode::Enter) => self.submit_shadow(),
            _ => Outcome::none(),
        }
    }

    fn submit_lookup(&mut self) -> Outcome {
        if self.lookup.is_loading() {
            return Outcome::none();
        }
        let iccid = self.input.value().trim().to_string();
        if !is_valid_iccid(&iccid) {
            return Outcome::invalid(ValidationError::InvalidIccid);
        }

        let ticket = self.lookup.begin();
        self.shadow = ShadowEditor::default();
        self.iccid = Some(iccid.clone());
        Outcome::command(Action::LookupDevice { ticket, iccid })
    }

    fn request_flag(&self, index: usize) -> Outcome {
        let current = self.shadow.flag(index).unwrap_or(false);
        Outcome::confirm(ConfirmRequest::ShadowFlag {
            field: index,
            label: SHADOW_FIELDS[index].label,
            value: !current,
        })
    }

    /// Apply a confirmed boolean edit to the local form.
    pub fn apply_flag(&mut self, index: usize, value: bool) -> Outcome {
        if !self.has_shadow() {
            return Outcome::none();
        }
        self.shadow.set_flag(index, value);
        Outcome::none()
    }

    fn submit_shadow(&mut self) -> Outcome {
        if self.shadow.is_saving() || !self.has_shadow() {
            return Outcome::none();
        }
        let Some(iccid) = self.iccid.clone() else {
            return Outcome::none();
        };
        let desired_state = match self.shadow.payload() {
            Ok(payload) => payload,
            Err(e) => return Outcome::invalid(e),
        };

        let ticket = Ticket::next();
        self.shadow.begin_write(ticket);
        Outcome::command(Action::UpdateShadow {
            ticket,
            iccid,
            desired_state,
        })
    }

    pub fn on_lookup(&mut self, ticket: Ticket, result: ApiResult<DeviceLookup>) -> Outcome {
        let result = match result {
            Ok(device) => match device.error.clone() {
                Some(error) => Err(error),
                None => Ok(device),
            },
            Err(e) => Err(e.user_message()),
        };
        if self.lookup.resolve(ticket, result).is_stale() {
            return Outcome::stale("device");
        }

        match self.lookup.ready().and_then(DeviceLookup::shadow) {
            Some(shadow) => self.shadow.seed(shadow),
            None => {
                self.shadow = ShadowEditor::default();
                self.focus = DeviceFocus::Iccid;
            }
        }
        Outcome::none()
    }

    pub fn on_shadow_updated(&mut self, ticket: Ticket, result: ApiResult<MessageResponse>) -> Outcome {
        let succeeded = result.is_ok();
        if !self.shadow.finish_write(ticket, succeeded) {
            return Outcome::stale("device");
        }

        match result {
            Ok(response) => {
                let message = response
                    .message
                    .unwrap_or_else(|| "Shadow updated".to_string());
                let mut outcome = Outcome::info(message);
                if let Some(iccid) = self.iccid.clone() {
                    let ticket = self.lookup.begin_refresh();
                    outcome.command = Some(Action::LookupDevice { ticket, iccid });
                }
                outcome
            }
            Err(e) => Outcome::failure(e.user_message()),
        }
    }
}
