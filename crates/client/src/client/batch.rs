//! CSV split API method for [`OpsClient`].

use std::num::NonZeroU64;
use std::path::Path;

use crate::client::OpsClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::SplitArchive;

impl OpsClient {
    /// Read `path` and upload it for splitting into `rows_per_chunk`-row chunks.
    pub async fn split_csv(&self, path: &Path, rows_per_chunk: NonZeroU64) -> Result<SplitArchive> {
        let contents = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.csv".to_string());

        endpoints::split_csv(
            &self.http,
            &self.base_url,
            &file_name,
            contents,
            rows_per_chunk,
            self.metrics(),
        )
        .await
    }
}
