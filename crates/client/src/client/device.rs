//! Device API methods for [`OpsClient`].

use serde_json::{Map, Value};

use crate::client::OpsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{DeviceLookup, MessageResponse};

impl OpsClient {
    /// Look up a device by ICCID.
    pub async fn device_lookup(&self, iccid: &str) -> Result<DeviceLookup> {
        endpoints::device_lookup(&self.http, &self.base_url, iccid, self.metrics()).await
    }

    /// Write desired shadow state for a device.
    pub async fn update_shadow(
        &self,
        iccid: &str,
        desired_state: Map<String, Value>,
    ) -> Result<MessageResponse> {
        endpoints::update_shadow(&self.http, &self.base_url, iccid, desired_state, self.metrics())
            .await
    }
}
