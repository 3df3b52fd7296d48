//! repocleaner - build-artifact version directory pruning.
//!
//! Walks a repository tree and, in every directory, keeps only the N most
//! recently modified version-named subdirectories ("1.2.3",
//! "2.0.0-SNAPSHOT", ...), deleting the rest. Deletions are immediate and
//! irreversible; the first filesystem error aborts the run.

pub mod error;
pub mod listing;
pub mod retention;
pub mod version;
pub mod walker;

// Re-export commonly used items
pub use error::{Error, Result};
pub use listing::{list_children, ChildEntry, SortOrder};
pub use retention::RetentionPolicy;
pub use version::VersionMatcher;
pub use walker::clean_tree;
