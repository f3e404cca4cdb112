//! Data models for backend API responses and requests.

pub mod data_url;
pub mod device;
pub mod logs;
pub mod person;
pub mod reports;
pub mod s3;
pub mod split;

pub use data_url::{DataUrlError, DecodedContent, parse_data_url};
pub use device::{
    DeviceLookup, GeneralInfo, HeartbeatInfo, IotInfo, IotJob, RegistrationInfo,
    ShadowUpdateRequest, is_valid_iccid,
};
pub use logs::{LogEntry, LogSearchRequest};
pub use person::{Account, CognitoUser, PersonLookup, SetPersonEnabledRequest};
pub use reports::{HealthStatus, LabelDay, LabelsOutput, MessageResponse, ToolReport};
pub use s3::{EntryKind, S3Entry, S3Object};
pub use split::{SplitArchive, safe_file_name};
