//! Version directory classification.

use regex::Regex;

use crate::error::Result;
use crate::listing::ChildEntry;

/// Names must start with `digits.digits`; anything may follow
/// ("1.0", "2.10.3-rc1", "3.0-SNAPSHOT").
const VERSION_PATTERN: &str = r"^\d+\.\d+";

/// Classifies directory entries as version directories by name.
#[derive(Debug, Clone)]
pub struct VersionMatcher {
    pattern: Regex,
}

impl VersionMatcher {
    /// Compile the version-name pattern. This happens once, before any
    /// filesystem access; a pattern error surfaces here rather than being
    /// swallowed.
    pub fn new() -> Result<Self> {
        Ok(VersionMatcher {
            pattern: Regex::new(VERSION_PATTERN)?,
        })
    }

    /// True iff `entry` is a directory whose name starts with a numeric
    /// dotted version prefix. Files never qualify, regardless of name.
    pub fn is_version_dir(&self, entry: &ChildEntry) -> bool {
        entry.is_dir && self.pattern.is_match(&entry.name)
    }
}
