//! Confirmation before mutating backend state.
//!
//! Responsibilities:
//! - Describe what a pending mutation would do ([`ConfirmRequest`]).
//! - Decide whether it may proceed via an injected [`ConfirmationPolicy`].
//!
//! Does NOT handle:
//! - Performing the mutation (the owning view does that once approved).
//! - Drawing the y/n popup (see `ui::popup`).
//!
//! Invariants:
//! - A `Declined` decision never reaches the network.
//! - A `Deferred` decision is resolved exactly once, by the confirm popup.

use std::fmt::Debug;

/// A mutation waiting for the user's go-ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmRequest {
    /// Enable or disable the looked-up person's user account.
    PersonEnabled { enabled: bool },
    /// Stage a boolean shadow field edit.
    ShadowFlag {
        field: usize,
        label: &'static str,
        value: bool,
    },
}

impl ConfirmRequest {
    pub fn prompt(&self) -> ConfirmPrompt {
        match self {
            ConfirmRequest::PersonEnabled { enabled } => {
                let verb = if *enabled { "enable" } else { "disable" };
                ConfirmPrompt {
                    title: "Confirm".to_string(),
                    message: format!("Are you sure you want to {verb} this user?"),
                }
            }
            ConfirmRequest::ShadowFlag { label, value, .. } => ConfirmPrompt {
                title: "Confirm".to_string(),
                message: format!("Are you sure you want to set {label} to {value}?"),
            },
        }
    }
}

/// Text shown to the user for a [`ConfirmRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmDecision {
    Approved,
    Declined,
    /// Ask the user; the answer arrives later through the confirm popup.
    Deferred,
}

/// Decides whether a mutation may proceed.
pub trait ConfirmationPolicy: Debug {
    fn confirm(&self, prompt: &ConfirmPrompt) -> ConfirmDecision;
}

/// Ask interactively with a y/n popup.
#[derive(Debug, Clone, Copy, Default)]
pub struct PopupConfirmation;

impl ConfirmationPolicy for PopupConfirmation {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> ConfirmDecision {
        ConfirmDecision::Deferred
    }
}

/// Answer every prompt the same way without asking (`--assume-yes`, tests).
#[derive(Debug, Clone, Copy)]
pub struct AutoConfirm(pub bool);

impl ConfirmationPolicy for AutoConfirm {
    fn confirm(&self, prompt: &ConfirmPrompt) -> ConfirmDecision {
        tracing::debug!(message = %prompt.message, approved = self.0, "Auto-answered confirmation");
        if self.0 {
            ConfirmDecision::Approved
        } else {
            ConfirmDecision::Declined
        }
    }
}
