//! Tree-diff reconciliation engine for Drive Reconcile
//!
//! Compares two path-annotated tree listings, a local filesystem tree and a
//! remote cloud-storage tree, and produces the deduplicated set of
//! differences:
//!
//! - **Asymmetric difference** keyed by exact path equality
//! - **Cloud-document equivalence**: a remote extensionless document and
//!   its transcoded, extension-bearing local counterpart cancel out
//! - **Prefix exclusions**: configured paths (files or whole subtrees) are
//!   omitted from both sides, segment-aligned
//! - **Directory subsumption** (optional): only the topmost missing
//!   ancestor of a missing subtree is reported
//!
//! The engine is pure and synchronous; it performs no I/O and never
//! mutates its inputs. Listing either tree lives in the `drive-fs` and
//! `drive-api` crates.

pub mod diff;
pub mod entry;
pub mod path;
pub mod report;

pub use diff::{DiffOptions, TreeDiff, diff};
pub use entry::{Entry, EntryKind};
pub use path::TreePath;
pub use report::render;
