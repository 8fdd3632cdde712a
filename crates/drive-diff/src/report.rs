//! Human-readable diff reports

use std::fmt::Write;

use crate::diff::TreeDiff;

const SEPARATOR_WIDTH: usize = 70;

/// Render a diff result as a deterministic textual report.
///
/// Returns the literal `"Synced!"` when both lists are empty; otherwise
/// each non-empty section is framed by a 70-dash separator line, listing
/// one `- path` line per entry in the order the engine produced. Whether
/// descendants of a missing directory appear is decided by the engine's
/// summarize option, never here.
pub fn render(result: &TreeDiff) -> String {
    if result.is_synced() {
        return "Synced!".to_string();
    }

    let separator = "-".repeat(SEPARATOR_WIDTH);
    let mut out = String::new();
    let _ = writeln!(out, "{separator}");

    if !result.local_only.is_empty() {
        let _ = writeln!(out, "These are missing from Google Drive:");
        for entry in &result.local_only {
            let _ = writeln!(out, "- {}", entry.path);
        }
        let _ = writeln!(out, "{separator}");
    }

    if !result.remote_only.is_empty() {
        let _ = writeln!(out, "These are missing locally:");
        for entry in &result.remote_only {
            let _ = writeln!(out, "- {}", entry.path);
        }
        let _ = writeln!(out, "{separator}");
    }

    out
}
