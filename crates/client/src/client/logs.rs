//! Log search API methods for [`OpsClient`].

use crate::client::OpsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{LogEntry, LogSearchRequest};

impl OpsClient {
    pub async fn aws_profiles(&self) -> Result<Vec<String>> {
        endpoints::aws_profiles(&self.http, &self.base_url, self.metrics()).await
    }

    pub async fn handlers(&self, profile: &str) -> Result<Vec<String>> {
        endpoints::handlers(&self.http, &self.base_url, profile, self.metrics()).await
    }

    pub async fn search_logs(&self, request: &LogSearchRequest) -> Result<Vec<LogEntry>> {
        endpoints::search_logs(&self.http, &self.base_url, request, self.metrics()).await
    }
}
