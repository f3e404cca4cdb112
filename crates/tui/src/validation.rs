//! Client-side input validation errors.
//!
//! A `ValidationError` blocks a submit before any request is issued.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Enter a person ID")]
    MissingPersonId,

    #[error("ICCID must be 19 or 20 digits")]
    InvalidIccid,

    #[error("Select an AWS profile")]
    MissingProfile,

    #[error("Select a handler")]
    MissingHandler,

    #[error("Enter a search term")]
    MissingSearchTerm,

    #[error("{field} must look like YYYY-MM-DD HH:MM[:SS], got '{value}'")]
    InvalidDateTime { field: &'static str, value: String },

    #[error("{field} '{value}' is skipped or repeated by a clock change; pick another time")]
    AmbiguousLocalTime { field: &'static str, value: String },

    #[error("Start time must be before end time")]
    EmptyTimeWindow,

    #[error("{field} must be a whole number, got '{value}'")]
    InvalidInteger { field: &'static str, value: String },

    #[error("{field} must be true or false, got '{value}'")]
    InvalidBoolean { field: &'static str, value: String },

    #[error("No shadow fields have values to send")]
    EmptyShadowUpdate,

    #[error("Choose a CSV file")]
    MissingFile,

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Rows per chunk must be a whole number of at least 1, got '{0}'")]
    InvalidRowsPerChunk(String),
}
