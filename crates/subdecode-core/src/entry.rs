//! Entry sets: the canonical form of a source's content.
//!
//! An [`EntrySet`] is an ordered sequence of trimmed, non-empty, unique
//! lines. Order is first-occurrence order from the source text and is only
//! cosmetic; comparisons between sets go through [`crate::diff`], which
//! looks at membership alone.

use serde::Serialize;
use std::collections::HashSet;

/// Ordered, deduplicated sequence of trimmed non-empty lines
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntrySet {
    entries: Vec<String>,
}

impl EntrySet {
    /// An entry set with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Normalize raw text into an entry set
    ///
    /// Splits on `\n`, trims each line (which also drops a trailing `\r`),
    /// skips empty lines and keeps the first occurrence of every line.
    /// Every input is valid; degenerate input yields an empty set.
    ///
    /// ```
    /// use subdecode_core::EntrySet;
    ///
    /// let set = EntrySet::normalize("b\na\nb\n\n a \n");
    /// assert_eq!(set.as_slice(), ["b", "a"]);
    /// ```
    pub fn normalize(text: &str) -> Self {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut entries = Vec::new();

        for line in text.split('\n') {
            let line = line.trim();
            if line.is_empty() || !seen.insert(line) {
                continue;
            }
            entries.push(line.to_string());
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.entries
    }

    /// Membership view used by the differ
    pub fn membership(&self) -> HashSet<&str> {
        self.iter().collect()
    }

    /// Serialized form: entries joined by `\n`, no trailing newline
    pub fn to_text(&self) -> String {
        self.entries.join("\n")
    }
}

impl<'a> IntoIterator for &'a EntrySet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
