//! Path-annotated file and directory records

use chrono::{DateTime, Utc};

use crate::path::TreePath;

/// Whether an entry is a file or a directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
}

/// One file or directory record from either tree.
///
/// Entries are immutable values owned by the collection holding them.
/// Equality of entries in a diff is decided by `path` alone; `kind`,
/// `modified_at` and `source_id` are carried along for reporting and for
/// the downloader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Full logical path relative to the common root
    pub path: TreePath,
    /// File or directory
    pub kind: EntryKind,
    /// Modification time, when the origin system provides one
    pub modified_at: Option<DateTime<Utc>>,
    /// Opaque identifier from the origin system; absent for local entries
    pub source_id: Option<String>,
}

impl Entry {
    /// A local file entry.
    pub fn file(path: impl Into<TreePath>, modified_at: Option<DateTime<Utc>>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::File,
            modified_at,
            source_id: None,
        }
    }

    /// A local directory entry.
    pub fn directory(path: impl Into<TreePath>, modified_at: Option<DateTime<Utc>>) -> Self {
        Self {
            path: path.into(),
            kind: EntryKind::Directory,
            modified_at,
            source_id: None,
        }
    }

    /// The same entry tagged with a remote object id.
    pub fn with_source_id(mut self, id: impl Into<String>) -> Self {
        self.source_id = Some(id.into());
        self
    }

    pub fn is_directory(&self) -> bool {
        self.kind == EntryKind::Directory
    }
}
