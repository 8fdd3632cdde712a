//! Credential loading
//!
//! Token acquisition is out of scope here: the client consumes a
//! pre-issued OAuth bearer token from a JSON credentials file and attaches
//! it to every request. Refreshing or exchanging service-account keys is
//! the operator's concern.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{Error, Result};

/// Credentials for the Drive API.
#[derive(Debug, Clone, Deserialize)]
pub struct Credentials {
    /// Bearer token sent as `Authorization: Bearer <token>`
    pub access_token: String,
}

/// Load credentials from a JSON file.
pub fn load_credentials(path: &Path) -> Result<Credentials> {
    let raw = fs::read_to_string(path).map_err(|e| Error::credentials(path, e.to_string()))?;
    let credentials: Credentials =
        serde_json::from_str(&raw).map_err(|e| Error::credentials(path, e.to_string()))?;
    if credentials.access_token.is_empty() {
        return Err(Error::credentials(path, "access_token is empty"));
    }
    Ok(credentials)
}
