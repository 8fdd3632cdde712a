//! Local filesystem side of Drive Reconcile
//!
//! Walks the configured local root into the engine's `Entry` form and
//! loads the exclusion list handed verbatim to the diff.

pub mod error;
pub mod exclusions;
pub mod walk;

pub use error::{Error, Result};
pub use exclusions::load_exclusions;
pub use walk::list_tree;
