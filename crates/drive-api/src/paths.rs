//! Full-path reconstruction from parent-id references

use std::collections::{HashMap, HashSet};

use tracing::warn;

use drive_diff::{Entry, TreePath};

use crate::model::DriveObject;

/// Turn a flat, deduplicated object listing into path-annotated entries.
///
/// Drive objects carry only a name and parent ids; the full path of each
/// object is reconstructed by walking first-parent references through an
/// id lookup built once over the whole listing. An object whose parent
/// chain leaves the listing (shared roots, insufficient fields) degrades
/// to the partial path accumulated so far.
pub fn build_entries(objects: &[DriveObject]) -> Vec<Entry> {
    let by_id: HashMap<&str, &DriveObject> =
        objects.iter().map(|o| (o.id.as_str(), o)).collect();

    objects
        .iter()
        .map(|object| {
            let path = trace_path(object, &by_id);
            let entry = if object.is_folder() {
                Entry::directory(path, object.modified_time)
            } else {
                Entry::file(path, object.modified_time)
            };
            entry.with_source_id(&object.id)
        })
        .collect()
}

/// Walk the first-parent chain of `object` up to the root, collecting
/// folder names leaf-first.
///
/// The walk is an explicit loop with a visited guard, so a corrupt listing
/// with a parent cycle terminates instead of looping.
fn trace_path(object: &DriveObject, by_id: &HashMap<&str, &DriveObject>) -> TreePath {
    let mut segments = vec![object.name.as_str()];
    let mut visited: HashSet<&str> = HashSet::from([object.id.as_str()]);
    let mut current = object;

    loop {
        let Some(parent_id) = current.parents.as_ref().and_then(|p| p.first()) else {
            break;
        };
        let Some(parent) = by_id.get(parent_id.as_str()) else {
            // Parent outside the listing: best-effort partial path
            break;
        };
        if !visited.insert(parent.id.as_str()) {
            warn!(id = %object.id, "parent cycle in drive listing, truncating path");
            break;
        }
        segments.push(parent.name.as_str());
        current = parent;
    }

    segments.reverse();
    TreePath::new(segments.join("/"))
}
