//! Per-directory retention policy.

use crate::error::{Error, Result};

/// How many of the most recently modified version directories survive in
/// each parent directory. Constructed once at startup and passed by
/// reference into the walker; never ambient global state.
#[derive(Debug, Clone, Copy)]
pub struct RetentionPolicy {
    keep: usize,
}

impl RetentionPolicy {
    /// Keep counts below 1 are rejected before any filesystem access.
    pub fn new(keep: usize) -> Result<Self> {
        if keep < 1 {
            return Err(Error::InvalidKeepCount(keep));
        }
        Ok(RetentionPolicy { keep })
    }

    pub fn keep(&self) -> usize {
        self.keep
    }

    /// Given version directories sorted most-recently-modified first,
    /// return the ones to delete: everything after the `keep` most recent.
    /// The kept set is always the `min(keep, len)` most recent; the
    /// returned slice is exactly the complement.
    pub fn select_for_deletion<'a, T>(&self, ordered: &'a [T]) -> &'a [T] {
        if ordered.len() <= self.keep {
            &[]
        } else {
            &ordered[self.keep..]
        }
    }
}
