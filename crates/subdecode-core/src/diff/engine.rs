//! Diff computation engine.

use crate::diff::model::DiffResult;
use crate::entry::EntrySet;

/// Compare `old` against `new` by set membership
///
/// An absent prior state is passed as an empty `old`, which makes every
/// new entry `added`. An empty `new` makes every old entry `removed`;
/// whether that may be persisted is decided by the pipeline.
pub fn compute_diff(old: &EntrySet, new: &EntrySet) -> DiffResult {
    let mut result = DiffResult::default();

    let old_members = old.membership();
    for entry in new.iter() {
        if old_members.contains(entry) {
            result.unchanged += 1;
        } else {
            result.added += 1;
        }
    }

    let new_members = new.membership();
    result.removed = old
        .iter()
        .filter(|entry| !new_members.contains(entry))
        .count();

    result
}
