//! Diff output types.

use serde::{Deserialize, Serialize};

/// Counts of added, unchanged and removed entries between two entry sets
///
/// A summary only; never persisted and recomputed on every run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffResult {
    /// Entries in the new set but not the old
    pub added: usize,
    /// Entries in both sets
    pub unchanged: usize,
    /// Entries in the old set but not the new
    pub removed: usize,
}

impl DiffResult {
    /// True when nothing was added or removed; no write is needed
    pub fn is_noop(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}
