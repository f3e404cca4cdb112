//! REST API endpoint implementations.
//!
//! Each function takes the shared `reqwest::Client` and base URL explicitly
//! so it can be exercised directly against a mock server.

mod csvsplitter;
mod device;
mod logs;
mod person;
mod reports;
mod request;
mod s3;

pub use csvsplitter::{filename_from_content_disposition, split_csv};
pub use device::{device_lookup, update_shadow};
pub use logs::{aws_profiles, handlers, search_logs};
pub use person::{person_lookup, set_person_enabled};
pub use reports::{health, labels, modem_failed_count};
pub use request::{read_json, remote_message, send_request};
pub use s3::{s3_list, s3_object};
