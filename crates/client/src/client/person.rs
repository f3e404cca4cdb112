//! Person API methods for [`OpsClient`].

use crate::client::OpsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{MessageResponse, PersonLookup};

impl OpsClient {
    /// Look up a person by ID.
    pub async fn person_lookup(&self, person_id: &str) -> Result<PersonLookup> {
        endpoints::person_lookup(&self.http, &self.base_url, person_id, self.metrics()).await
    }

    /// Enable or disable the person's Cognito user.
    pub async fn set_person_enabled(
        &self,
        person_id: &str,
        enabled: bool,
    ) -> Result<MessageResponse> {
        endpoints::set_person_enabled(&self.http, &self.base_url, person_id, enabled, self.metrics())
            .await
    }
}
