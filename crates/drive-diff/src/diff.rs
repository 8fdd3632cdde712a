//! Tree-diff computation between a local and a remote listing

use std::collections::{HashMap, HashSet};

use crate::entry::Entry;

/// Options controlling a single diff invocation.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffOptions {
    /// Collapse the contents of a missing directory into the directory
    /// itself, reporting only the topmost missing ancestor.
    pub summarize: bool,
}

/// Result of reconciling two tree listings.
///
/// A snapshot: constructed once per invocation, never updated in place.
/// Both lists are sorted lexicographically by path.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TreeDiff {
    /// Present locally, absent remotely, after filtering
    pub local_only: Vec<Entry>,
    /// Present remotely, absent locally, after filtering
    pub remote_only: Vec<Entry>,
}

impl TreeDiff {
    /// True when the two trees matched, modulo cloud-document equivalence
    /// and exclusions.
    pub fn is_synced(&self) -> bool {
        self.local_only.is_empty() && self.remote_only.is_empty()
    }

    /// The remote-only entries that are plain files, the set the
    /// downloader acts on.
    pub fn remote_only_files(&self) -> impl Iterator<Item = &Entry> {
        self.remote_only.iter().filter(|e| !e.is_directory())
    }
}

/// Reconcile two tree listings against an exclusion list.
///
/// Entries are compared by exact path equality; callers must normalize
/// before diffing. If one side contains duplicate paths the last-seen
/// entry wins. The engine is pure: it never touches either tree and has
/// no failure modes over well-formed input.
pub fn diff(
    local: &[Entry],
    remote: &[Entry],
    excluded_prefixes: &[String],
    options: DiffOptions,
) -> TreeDiff {
    let local_by_path = index_by_path(local);
    let remote_by_path = index_by_path(remote);

    let mut local_only = missing_from(&local_by_path, &remote_by_path);
    let mut remote_only = missing_from(&remote_by_path, &local_by_path);

    filter_cloud_documents(&mut local_only, &mut remote_only);

    filter_excluded(&mut local_only, excluded_prefixes);
    filter_excluded(&mut remote_only, excluded_prefixes);

    if options.summarize {
        subsume_into_missing_directories(&mut local_only);
        subsume_into_missing_directories(&mut remote_only);
    }

    TreeDiff {
        local_only,
        remote_only,
    }
}

/// Build the per-side path lookup. Later entries replace earlier ones
/// sharing the same path.
fn index_by_path(entries: &[Entry]) -> HashMap<&str, &Entry> {
    entries.iter().map(|e| (e.path.as_str(), e)).collect()
}

/// Entries of `side` whose path does not appear in `other`, sorted
/// lexicographically by path. Directory/file classification is ignored
/// here; the path is the identity.
///
/// Sorting happens once here; every later step filters with `retain`,
/// which keeps relative order, so the final lists stay sorted and the
/// whole diff is deterministic.
fn missing_from(
    side: &HashMap<&str, &Entry>,
    other: &HashMap<&str, &Entry>,
) -> Vec<Entry> {
    let mut missing: Vec<Entry> = side
        .values()
        .filter(|e| !other.contains_key(e.path.as_str()))
        .map(|e| (*e).clone())
        .collect();
    missing.sort_by(|a, b| a.path.cmp(&b.path));
    missing
}

/// Cancel out cloud-native documents that were transcoded on download.
///
/// Such documents appear remotely under their bare base name and locally
/// with an extension appended, so a raw path comparison flags both sides.
/// A local-only file whose extension-stripped path matches a remote-only
/// file consumes that remote entry; once consumed it cannot match a second
/// local candidate.
fn filter_cloud_documents(local_only: &mut Vec<Entry>, remote_only: &mut Vec<Entry>) {
    let mut unmatched_remote_files: HashSet<&str> = remote_only
        .iter()
        .filter(|e| !e.is_directory())
        .map(|e| e.path.as_str())
        .collect();

    let mut matched_local = HashSet::new();
    let mut matched_remote = HashSet::new();

    for local_file in local_only.iter().filter(|e| !e.is_directory()) {
        let Some(stripped) = local_file.path.with_extension_stripped() else {
            continue;
        };
        if unmatched_remote_files.remove(stripped.as_str()) {
            matched_local.insert(local_file.path.clone());
            matched_remote.insert(stripped);
        }
    }

    local_only.retain(|e| !matched_local.contains(&e.path));
    remote_only.retain(|e| !matched_remote.contains(&e.path));
}

/// Drop entries that equal an excluded prefix or lie under one.
fn filter_excluded(entries: &mut Vec<Entry>, excluded_prefixes: &[String]) {
    if excluded_prefixes.is_empty() {
        return;
    }
    entries.retain(|e| !excluded_prefixes.iter().any(|p| e.path.is_within(p)));
}

/// Keep only the topmost entry of each missing subtree.
///
/// Any entry that is a strict descendant of a surviving directory entry in
/// the same set is dropped, so nested missing subtrees collapse to their
/// outermost directory and disjoint subtrees each keep their own.
fn subsume_into_missing_directories(entries: &mut Vec<Entry>) {
    let directories: Vec<_> = entries
        .iter()
        .filter(|e| e.is_directory())
        .map(|e| e.path.clone())
        .collect();

    entries.retain(|e| !directories.iter().any(|dir| dir.contains(&e.path)));
}
