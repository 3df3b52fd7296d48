//! Recursive tree walk applying the retention policy at every level.

use std::fs;
use std::io;
use std::path::Path;

use chrono::{DateTime, Local};
use colored::Colorize;
use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::listing::{list_children, ChildEntry, SortOrder};
use crate::retention::RetentionPolicy;
use crate::version::VersionMatcher;

/// Walk every directory under `root` (including `root` itself) and prune
/// its version-named children down to the policy's keep count.
///
/// The walk is pre-order depth-first, children sorted by file name, and
/// strictly sequential: a directory is fully listed, filtered, and pruned
/// before the walk reads its child list, so a subtree deleted at one
/// level is never descended into afterwards. A directory that vanishes
/// anyway is skipped as a benign no-op; a missing or unreadable root is
/// always fatal. Any other failure aborts the entire walk.
pub fn clean_tree(root: &Path, matcher: &VersionMatcher, policy: &RetentionPolicy) -> Result<()> {
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            // Removed by a retention action at an ancestor level.
            Err(err) if err.depth() > 0 && is_not_found(&err) => continue,
            Err(err) => {
                let path = err.path().unwrap_or(root).to_path_buf();
                return Err(Error::Walk { path, source: err });
            }
        };

        if entry.file_type().is_dir() {
            clean_directory(entry.path(), matcher, policy)?;
        }
    }

    Ok(())
}

fn is_not_found(err: &walkdir::Error) -> bool {
    err.io_error()
        .map(|io| io.kind() == io::ErrorKind::NotFound)
        .unwrap_or(false)
}

/// Apply the retention policy to one directory's immediate children.
/// Reports every qualifying version directory, then deletes the ones
/// falling outside the keep count.
fn clean_directory(dir: &Path, matcher: &VersionMatcher, policy: &RetentionPolicy) -> Result<()> {
    let children = list_children(dir, SortOrder::NewestFirst)?;
    let versions: Vec<ChildEntry> = children
        .into_iter()
        .filter(|entry| matcher.is_version_dir(entry))
        .collect();

    for version in &versions {
        println!(
            "directory: {}, version: {}, last modified: {}",
            dir.display(),
            version.name,
            format_mtime(version)
        );
    }

    for doomed in policy.select_for_deletion(&versions) {
        println!(
            "{}",
            format!(
                "deleting directory: {}, version: {}, last modified: {}",
                dir.display(),
                doomed.name,
                format_mtime(doomed)
            )
            .red()
        );
        remove_version_dir(doomed)?;
    }

    Ok(())
}

/// Recursively and permanently delete one version directory. A directory
/// that is already gone counts as removed.
fn remove_version_dir(entry: &ChildEntry) -> Result<()> {
    match fs::remove_dir_all(&entry.path) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(source) => Err(Error::Remove {
            path: entry.path.clone(),
            source,
        }),
    }
}

fn format_mtime(entry: &ChildEntry) -> String {
    DateTime::<Local>::from(entry.modified)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}
