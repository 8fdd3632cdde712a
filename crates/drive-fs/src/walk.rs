//! Local filesystem listing

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use drive_diff::{Entry, TreePath};

use crate::error::{Error, Result};

/// List every file and directory under the named subfolders of `root`.
///
/// Paths in the returned entries are relative to `root` and keep the
/// subfolder name as their first segment, matching how the remote lister
/// reconstructs paths from the drive root. The walk uses an explicit
/// worklist, so arbitrarily deep trees never grow the call stack.
///
/// A missing `root` is a fatal configuration error; a missing named
/// subfolder is skipped with a warning.
pub fn list_tree(root: &Path, folders: &[String]) -> Result<Vec<Entry>> {
    if !root.is_dir() {
        return Err(Error::RootNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut entries = Vec::new();
    let mut worklist: Vec<(PathBuf, TreePath)> = Vec::new();

    for folder in folders {
        let native = root.join(folder);
        if !native.is_dir() {
            warn!(folder = %folder, "named subfolder not found under local root, skipping");
            continue;
        }
        let logical = TreePath::new(folder);
        entries.push(Entry::directory(logical.clone(), modified_at(&native)));
        worklist.push((native, logical));
    }

    while let Some((native_dir, logical_dir)) = worklist.pop() {
        let read_dir = fs::read_dir(&native_dir).map_err(|e| Error::io(&native_dir, e))?;
        for child in read_dir {
            let child = child.map_err(|e| Error::io(&native_dir, e))?;
            let native = child.path();
            let name = child.file_name();
            let logical = logical_dir.join(&name.to_string_lossy());

            let file_type = child.file_type().map_err(|e| Error::io(&native, e))?;
            if file_type.is_dir() {
                entries.push(Entry::directory(logical.clone(), modified_at(&native)));
                worklist.push((native, logical));
            } else {
                entries.push(Entry::file(logical, modified_at(&native)));
            }
        }
    }

    debug!(count = entries.len(), root = %root.display(), "listed local tree");
    Ok(entries)
}

/// Modification time from filesystem metadata, when the platform provides
/// one.
fn modified_at(path: &Path) -> Option<DateTime<Utc>> {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .ok()
        .map(DateTime::<Utc>::from)
}
