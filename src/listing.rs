//! Directory listings ordered by modification time.

use std::cmp::Reverse;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, Result};

/// Read-only snapshot of one immediate child of a directory.
#[derive(Debug, Clone)]
pub struct ChildEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    pub modified: SystemTime,
}

/// Ordering applied to a directory listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    NewestFirst,
    OldestFirst,
}

/// List the immediate children of `dir`, ordered by modification time.
///
/// The listing is materialized eagerly and the directory handle is
/// released when this function returns. Any failure to read the directory
/// or stat an entry aborts the whole call; no partial listing is returned.
/// Entries that are symlinks report `is_dir: false` and are never
/// candidates for retention.
///
/// Entries with equal modification times have no guaranteed relative
/// order.
pub fn list_children(dir: &Path, order: SortOrder) -> Result<Vec<ChildEntry>> {
    let read_dir = fs::read_dir(dir).map_err(|source| Error::ReadDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut children = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|source| Error::ReadDir {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = entry.path();
        // DirEntry::metadata does not traverse symlinks, so a symlink to a
        // directory is classified as a non-directory here.
        let metadata = entry.metadata().map_err(|source| Error::ReadEntry {
            path: path.clone(),
            source,
        })?;
        let modified = metadata.modified().map_err(|source| Error::ReadEntry {
            path: path.clone(),
            source,
        })?;

        children.push(ChildEntry {
            name: entry.file_name().to_string_lossy().into_owned(),
            path,
            is_dir: metadata.is_dir(),
            modified,
        });
    }

    match order {
        SortOrder::NewestFirst => children.sort_by_key(|entry| Reverse(entry.modified)),
        SortOrder::OldestFirst => children.sort_by_key(|entry| entry.modified),
    }

    Ok(children)
}
