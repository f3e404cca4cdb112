//! S3 listing and object models.

use serde::{Deserialize, Serialize};

use super::data_url::{DataUrlError, DecodedContent, parse_data_url};

/// Whether a listing entry is a prefix or an object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Folder,
    File,
    #[serde(other)]
    Other,
}

/// One item of `GET /api/s3/list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Entry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Full object key; for folders this ends with `/`.
    pub key: String,
}

impl S3Entry {
    pub fn is_folder(&self) -> bool {
        self.kind == EntryKind::Folder
    }
}

/// Result of `GET /api/s3/object`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct S3Object {
    pub key: String,
    /// `data:<media>;base64,<payload>` string.
    pub content: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub last_modified: String,
}

impl S3Object {
    /// Decode the data URL content into raw bytes.
    pub fn decode_content(&self) -> Result<DecodedContent, DataUrlError> {
        parse_data_url(&self.content)
    }
}
