//! S3 browsing API methods for [`OpsClient`].

use crate::client::OpsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{S3Entry, S3Object};

impl OpsClient {
    /// List entries under `prefix` (`""` is the bucket root).
    pub async fn s3_list(&self, bucket: &str, prefix: &str) -> Result<Vec<S3Entry>> {
        endpoints::s3_list(&self.http, &self.base_url, bucket, prefix, self.metrics()).await
    }

    /// Fetch a single object's content.
    pub async fn s3_object(&self, bucket: &str, key: &str) -> Result<S3Object> {
        endpoints::s3_object(&self.http, &self.base_url, bucket, key, self.metrics()).await
    }
}
