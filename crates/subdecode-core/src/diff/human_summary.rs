//! Human-readable summary renderer for entry set diffs.

use crate::diff::model::DiffResult;

/// Render the per-run change counts, one per line
///
/// Informational only; used for the console report.
pub fn render_human_summary(diff: &DiffResult) -> String {
    format!(
        "➕ Added: {}\n✔ Unchanged: {}\n➖ Removed: {}",
        diff.added, diff.unchanged, diff.removed
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_all_counts() {
        let summary = render_human_summary(&DiffResult {
            added: 3,
            unchanged: 7,
            removed: 0,
        });
        let lines: Vec<&str> = summary.lines().collect();
        assert_eq!(lines, ["➕ Added: 3", "✔ Unchanged: 7", "➖ Removed: 0"]);
    }
}
