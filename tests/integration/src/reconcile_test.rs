//! End-to-end reconciliation tests
//!
//! Exercise the complete flow over a real tempdir: local walk ->
//! exclusion loading -> diff -> report, with the remote side supplied as
//! in-memory entries built from Drive-shaped objects.

use std::fs;

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use drive_api::{DriveObject, FOLDER_MIME_TYPE, build_entries};
use drive_diff::{DiffOptions, Entry, diff, render};
use drive_fs::{list_tree, load_exclusions};

/// Set up a local tree:
///
/// ```text
/// Docs/
///   report.xlsx
///   notes.txt
///   archive/
///     old.txt
/// ```
fn setup_local_tree() -> TempDir {
    let temp = TempDir::new().unwrap();
    let docs = temp.path().join("Docs");
    fs::create_dir_all(docs.join("archive")).unwrap();
    fs::write(docs.join("report.xlsx"), "cells").unwrap();
    fs::write(docs.join("notes.txt"), "notes").unwrap();
    fs::write(docs.join("archive/old.txt"), "old").unwrap();
    temp
}

fn drive_folder(id: &str, name: &str, parent: Option<&str>) -> DriveObject {
    DriveObject {
        id: id.to_string(),
        name: name.to_string(),
        mime_type: FOLDER_MIME_TYPE.to_string(),
        parents: parent.map(|p| vec![p.to_string()]),
        modified_time: None,
    }
}

fn drive_file(id: &str, name: &str, parent: &str) -> DriveObject {
    DriveObject {
        id: id.to_string(),
        name: name.to_string(),
        mime_type: "application/octet-stream".to_string(),
        parents: Some(vec![parent.to_string()]),
        modified_time: None,
    }
}

#[test]
fn matching_trees_report_synced() {
    let temp = setup_local_tree();
    let local = list_tree(temp.path(), &["Docs".to_string()]).unwrap();

    // The drive-side "report" is a cloud-native document without the
    // extension the local copy gained on download.
    let remote = build_entries(&[
        drive_folder("d1", "Docs", None),
        drive_folder("d2", "archive", Some("d1")),
        drive_file("f1", "report", "d1"),
        drive_file("f2", "notes.txt", "d1"),
        drive_file("f3", "old.txt", "d2"),
    ]);

    let result = diff(&local, &remote, &[], DiffOptions { summarize: true });

    assert!(result.is_synced());
    assert_eq!(render(&result), "Synced!");
}

#[test]
fn missing_remote_subtree_is_summarized() {
    let temp = setup_local_tree();
    let local = list_tree(temp.path(), &["Docs".to_string()]).unwrap();

    // Remote never got the archive folder or the notes file
    let remote = build_entries(&[
        drive_folder("d1", "Docs", None),
        drive_file("f1", "report", "d1"),
    ]);

    let result = diff(&local, &remote, &[], DiffOptions { summarize: true });

    let local_only: Vec<_> = result.local_only.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(local_only, vec!["Docs/archive", "Docs/notes.txt"]);
    assert!(result.remote_only.is_empty());

    let report = render(&result);
    assert!(report.contains("These are missing from Google Drive:"));
    assert!(report.contains("- Docs/archive"));
    assert!(!report.contains("- Docs/archive/old.txt"));
}

#[test]
fn full_listing_shows_subsumed_descendants() {
    let temp = setup_local_tree();
    let local = list_tree(temp.path(), &["Docs".to_string()]).unwrap();

    let remote = build_entries(&[
        drive_folder("d1", "Docs", None),
        drive_file("f1", "report", "d1"),
        drive_file("f2", "notes.txt", "d1"),
    ]);

    let result = diff(&local, &remote, &[], DiffOptions { summarize: false });

    let local_only: Vec<_> = result.local_only.iter().map(|e| e.path.as_str()).collect();
    assert_eq!(local_only, vec!["Docs/archive", "Docs/archive/old.txt"]);
}

#[test]
fn exclusion_file_suppresses_both_sides() {
    let temp = setup_local_tree();
    let local = list_tree(temp.path(), &["Docs".to_string()]).unwrap();

    let exclusions_path = temp.path().join("unsynced_list.yaml");
    fs::write(
        &exclusions_path,
        "unsynced_objects:\n  - Docs/archive\n  - Docs/drive-extra.bin\n",
    )
    .unwrap();
    let exclusions = load_exclusions(&exclusions_path).unwrap();

    let remote = build_entries(&[
        drive_folder("d1", "Docs", None),
        drive_file("f1", "report", "d1"),
        drive_file("f2", "notes.txt", "d1"),
        drive_file("f4", "drive-extra.bin", "d1"),
    ]);

    let result = diff(&local, &remote, &exclusions, DiffOptions { summarize: true });

    assert!(result.is_synced());
}

#[test]
fn remote_only_files_are_the_download_set() {
    let temp = setup_local_tree();
    let local = list_tree(temp.path(), &["Docs".to_string()]).unwrap();

    let remote = build_entries(&[
        drive_folder("d1", "Docs", None),
        drive_folder("d2", "archive", Some("d1")),
        drive_folder("d3", "photos", Some("d1")),
        drive_file("f1", "report", "d1"),
        drive_file("f2", "notes.txt", "d1"),
        drive_file("f3", "old.txt", "d2"),
        drive_file("f5", "trip.jpg", "d3"),
    ]);

    // summarize = false: the downloader needs each file individually
    let result = diff(&local, &remote, &[], DiffOptions { summarize: false });

    let downloads: Vec<&Entry> = result.remote_only_files().collect();
    assert_eq!(downloads.len(), 1);
    assert_eq!(downloads[0].path.as_str(), "Docs/photos/trip.jpg");
    assert_eq!(downloads[0].source_id.as_deref(), Some("f5"));
}

#[test]
fn diff_of_walked_tree_is_deterministic() {
    let temp = setup_local_tree();
    let local = list_tree(temp.path(), &["Docs".to_string()]).unwrap();
    let remote = build_entries(&[drive_folder("d1", "Docs", None)]);

    let first = diff(&local, &remote, &[], DiffOptions { summarize: false });
    let second = diff(&local, &remote, &[], DiffOptions { summarize: false });

    assert_eq!(first, second);
    assert_eq!(render(&first), render(&second));
}
