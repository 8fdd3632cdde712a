//! Serde models for Drive API payloads

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// Mime type Drive uses to mark folder objects
pub const FOLDER_MIME_TYPE: &str = "application/vnd.google-apps.folder";

/// One object from a `files.list` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DriveObject {
    pub id: String,
    pub name: String,
    pub mime_type: String,
    /// Parent folder ids; the first one is the canonical location.
    /// Absent for objects at the listing root.
    #[serde(default)]
    pub parents: Option<Vec<String>>,
    #[serde(default)]
    pub modified_time: Option<DateTime<Utc>>,
}

impl DriveObject {
    pub fn is_folder(&self) -> bool {
        self.mime_type == FOLDER_MIME_TYPE
    }
}

/// One page of a paginated `files.list` response.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileListPage {
    #[serde(default)]
    pub files: Vec<DriveObject>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}
