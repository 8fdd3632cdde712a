//! Google Drive side of Drive Reconcile
//!
//! Lists the remote tree by paginating the Drive v3 `files.list` endpoint,
//! reconstructs full logical paths from parent-id references, and downloads
//! missing files back into the local tree on request.
//!
//! Listing and path reconstruction are split so the reconstruction logic is
//! testable as a pure function over in-memory objects; only `DriveClient`
//! ever touches the network.

pub mod client;
pub mod credentials;
pub mod error;
pub mod model;
pub mod paths;

pub use client::{DownloadSummary, DriveClient};
pub use credentials::{Credentials, load_credentials};
pub use error::{Error, Result};
pub use model::{DriveObject, FOLDER_MIME_TYPE, FileListPage};
pub use paths::build_entries;
