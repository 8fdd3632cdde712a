//! Drive REST client: paginated listing and per-file downloads

use std::collections::HashSet;
use std::path::Path;

use reqwest::header;
use tracing::{debug, info, warn};

use drive_diff::Entry;

use crate::credentials::Credentials;
use crate::error::{Error, Result};
use crate::model::{DriveObject, FileListPage};
use crate::paths::build_entries;

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/drive/v3";
const USER_AGENT: &str = concat!("drive-reconcile/", env!("CARGO_PKG_VERSION"));
const PAGE_SIZE: u32 = 1000;
const LIST_FIELDS: &str = "nextPageToken, files(id, name, mimeType, parents, modifiedTime)";

/// Outcome of a download batch. Individual failures never abort the batch,
/// they only show up in the count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DownloadSummary {
    pub downloaded: usize,
    pub failed: usize,
}

/// Client for the Drive v3 REST API.
///
/// Carries the bearer token in the default headers, the way other remote
/// clients in this workspace's lineage attach configured auth tokens.
pub struct DriveClient {
    http: reqwest::Client,
    base_url: String,
}

impl DriveClient {
    pub fn new(credentials: &Credentials) -> Result<Self> {
        let mut auth_value =
            header::HeaderValue::from_str(&format!("Bearer {}", credentials.access_token))
                .map_err(|e| Error::InvalidToken {
                    message: e.to_string(),
                })?;
        auth_value.set_sensitive(true);

        let mut headers = header::HeaderMap::new();
        headers.insert(header::AUTHORIZATION, auth_value);

        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API endpoint. Intended for tests
    /// against a stub server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the complete remote listing as path-annotated entries.
    pub async fn fetch_all_entries(&self) -> Result<Vec<Entry>> {
        let objects = self.list_all_objects().await?;
        Ok(build_entries(&objects))
    }

    /// Page through `files.list` until the token runs out.
    ///
    /// Objects are deduplicated across pages by id once the full listing
    /// is in hand, so a page boundary moving under us cannot produce a
    /// duplicate path on one side of the diff.
    pub async fn list_all_objects(&self) -> Result<Vec<DriveObject>> {
        let url = format!("{}/files", self.base_url);
        let mut all_objects = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut query = vec![
                ("q", "trashed = false".to_string()),
                ("fields", LIST_FIELDS.to_string()),
                ("pageSize", PAGE_SIZE.to_string()),
            ];
            if let Some(token) = &page_token {
                query.push(("pageToken", token.clone()));
            }

            let response = self.http.get(&url).query(&query).send().await?;
            let page: FileListPage = parse_json(response).await?;

            info!(fetched = page.files.len(), "fetched objects from Drive");
            all_objects.extend(page.files);

            page_token = page.next_page_token;
            if page_token.is_none() {
                break;
            }
        }

        Ok(dedupe_objects(all_objects))
    }

    /// Download the given file entries into `root` at their relative
    /// paths, creating intermediate directories as needed.
    ///
    /// Directory entries are skipped. A failure on one file (permission,
    /// network, quota) is logged with as much context as the response
    /// offers and the batch moves on.
    pub async fn download_files(&self, entries: &[Entry], root: &Path) -> Result<DownloadSummary> {
        if !root.is_dir() {
            return Err(Error::RootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut summary = DownloadSummary::default();
        for entry in entries.iter().filter(|e| !e.is_directory()) {
            match self.download_file(entry, root).await {
                Ok(()) => {
                    info!(path = %entry.path, "downloaded file");
                    summary.downloaded += 1;
                }
                Err(err) => {
                    warn!(path = %entry.path, error = %err, "failed to download file");
                    summary.failed += 1;
                }
            }
        }
        Ok(summary)
    }

    async fn download_file(&self, entry: &Entry, root: &Path) -> Result<()> {
        let Some(id) = entry.source_id.as_deref() else {
            return Err(Error::MissingId {
                path: entry.path.to_string(),
            });
        };

        let target = root.join(entry.path.as_str());
        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| Error::io(parent, e))?;
        }

        let url = format!("{}/files/{}", self.base_url, id);
        let response = self
            .http
            .get(&url)
            .query(&[("alt", "media")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Api {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        tokio::fs::write(&target, &bytes)
            .await
            .map_err(|e| Error::io(&target, e))?;
        debug!(path = %entry.path, bytes = bytes.len(), "wrote file");
        Ok(())
    }
}

/// Drop repeated objects, keeping the first occurrence of each id.
fn dedupe_objects(objects: Vec<DriveObject>) -> Vec<DriveObject> {
    let mut seen = HashSet::new();
    objects
        .into_iter()
        .filter(|o| seen.insert(o.id.clone()))
        .collect()
}

async fn parse_json<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(Error::Api {
            status: status.as_u16(),
            body,
        });
    }
    Ok(response.json().await?)
}
