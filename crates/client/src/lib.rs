//! opsdash backend API client.
//!
//! This crate provides a typed client for the operations gateway: person and
//! device lookups, device shadow writes, CloudWatch log search, S3 browsing,
//! CSV splitting and canned reports. Failures are reported uniformly through
//! [`ClientError`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
mod serde_helpers;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::OpsClient;
pub use client::builder::OpsClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{
    Account, CognitoUser, DataUrlError, DecodedContent, DeviceLookup, EntryKind, GeneralInfo,
    HealthStatus, HeartbeatInfo, IotInfo, IotJob, LabelDay, LabelsOutput, LogEntry,
    LogSearchRequest, MessageResponse, PersonLookup, RegistrationInfo, S3Entry, S3Object,
    SplitArchive, ToolReport, is_valid_iccid, parse_data_url, safe_file_name,
};
