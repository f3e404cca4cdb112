//! Report and health API methods for [`OpsClient`].

use crate::client::OpsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{HealthStatus, LabelDay, LabelsOutput, ToolReport};

impl OpsClient {
    pub async fn labels(&self, day: LabelDay) -> Result<LabelsOutput> {
        endpoints::labels(&self.http, &self.base_url, day, self.metrics()).await
    }

    pub async fn labels_today(&self) -> Result<LabelsOutput> {
        self.labels(LabelDay::Today).await
    }

    pub async fn labels_tomorrow(&self) -> Result<LabelsOutput> {
        self.labels(LabelDay::Tomorrow).await
    }

    pub async fn modem_failed_count(&self) -> Result<ToolReport> {
        endpoints::modem_failed_count(&self.http, &self.base_url, self.metrics()).await
    }

    pub async fn health(&self) -> Result<HealthStatus> {
        endpoints::health(&self.http, &self.base_url, self.metrics()).await
    }
}
