//! Device (ICCID) lookup and shadow update models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::serde_helpers::opt_string_from_number_or_string;

/// Key the backend adds to the flattened shadow for the reported timestamp.
pub const SHADOW_LAST_UPDATED_KEY: &str = "Last Updated";

/// Whether `iccid` is 19 or 20 ASCII digits, the only form the backend accepts.
pub fn is_valid_iccid(iccid: &str) -> bool {
    (19..=20).contains(&iccid.len()) && iccid.bytes().all(|b| b.is_ascii_digit())
}

/// Result of `GET /api/device_lookup`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceLookup {
    #[serde(default)]
    pub general: Option<GeneralInfo>,
    #[serde(default)]
    pub registration: Option<RegistrationInfo>,
    #[serde(default)]
    pub heartbeat: Option<HeartbeatInfo>,
    #[serde(default)]
    pub iot: Option<IotInfo>,
    /// Non-fatal warnings.
    #[serde(default)]
    pub errors: Vec<String>,
    /// Fatal error reported with a 2xx status.
    #[serde(default)]
    pub error: Option<String>,
}

impl DeviceLookup {
    /// The flattened shadow document, if IoT data was returned.
    pub fn shadow(&self) -> Option<&Map<String, Value>> {
        self.iot.as_ref().and_then(|iot| iot.shadow.as_ref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralInfo {
    #[serde(default)]
    pub iccid: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub year_of_manufacture: Option<String>,
    #[serde(default)]
    pub refurb_records: Option<u64>,
    #[serde(default)]
    pub device_type: Option<String>,
    #[serde(default)]
    pub battery_replaced: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistrationInfo {
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub registration_time: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub firmware_on_registration: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub battery_on_registration: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeartbeatInfo {
    #[serde(default)]
    pub last_seen: Option<String>,
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub firmware: Option<String>,
    /// Integer percentage or a placeholder such as `"N/A"`.
    #[serde(default, deserialize_with = "opt_string_from_number_or_string")]
    pub battery_percentage: Option<String>,
    #[serde(default)]
    pub gps_status: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub location_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IotInfo {
    #[serde(default)]
    pub jobs: Option<Vec<IotJob>>,
    #[serde(default)]
    pub shadow: Option<Map<String, Value>>,
}

impl IotInfo {
    pub fn shadow_last_updated(&self) -> Option<&str> {
        self.shadow
            .as_ref()
            .and_then(|s| s.get(SHADOW_LAST_UPDATED_KEY))
            .and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IotJob {
    #[serde(rename = "jobId", default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub simplified_status: Option<String>,
    #[serde(rename = "lastUpdatedAt", default)]
    pub last_updated_at: Option<String>,
}

/// Body of `POST /api/update_shadow`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShadowUpdateRequest {
    pub iccid: String,
    pub desired_state: Map<String, Value>,
}
