//! Error taxonomy for a cleanup run.

use std::io;
use std::path::PathBuf;

/// Errors that abort a cleanup run. There is no local recovery: every
/// variant propagates to the entry point, which reports it and exits
/// non-zero. Deletions performed before the failure are not rolled back.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Keep counts below 1 would delete every version directory.
    #[error("at least 1 version directory must be kept, got {0}")]
    InvalidKeepCount(usize),

    /// The version-name pattern failed to compile.
    #[error("invalid version directory pattern")]
    Pattern(#[from] regex::Error),

    /// A directory could not be opened or its entries read.
    #[error("unable to read directory '{}'", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Metadata for a directory entry could not be read.
    #[error("unable to read metadata for '{}'", path.display())]
    ReadEntry {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Traversal of the tree could not proceed.
    #[error("unable to walk '{}'", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// A version directory selected for deletion could not be removed.
    #[error("unable to remove directory '{}'", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
