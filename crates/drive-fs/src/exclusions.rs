//! Exclusion-list loading

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// On-disk shape of the exclusion file.
///
/// A flat YAML document listing path prefixes that are intentionally not
/// synced; each prefix may denote a single file or a whole subtree.
///
/// ```yaml
/// unsynced_objects:
///   - Docs/scratch
///   - Docs/keys/server.pem
/// ```
#[derive(Debug, Deserialize)]
struct ExclusionFile {
    #[serde(default)]
    unsynced_objects: Vec<String>,
}

/// Load excluded path prefixes from a YAML file.
///
/// The prefixes are passed verbatim into the diff engine; no normalization
/// happens here beyond what YAML parsing does.
pub fn load_exclusions(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    let parsed: ExclusionFile =
        serde_yaml::from_str(&raw).map_err(|e| Error::ExclusionParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    debug!(count = parsed.unsynced_objects.len(), "loaded exclusion list");
    Ok(parsed.unsynced_objects)
}
