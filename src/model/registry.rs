//! The ordered list of discovered entries.

use super::FileEntry;
use crate::filter::filter_entries;

/// Entries in discovery order.
///
/// A registry is rebuilt wholesale on every pick: callers [`clear`](Self::clear)
/// it and repopulate, never merge with a previous scan.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    entries: Vec<FileEntry>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Append an entry at the end.
    pub fn push(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at `index` in discovery order.
    pub fn get(&self, index: usize) -> Option<&FileEntry> {
        self.entries.get(index)
    }

    /// All entries as a slice.
    pub fn entries(&self) -> &[FileEntry] {
        &self.entries
    }

    /// Iterate in discovery order.
    pub fn iter(&self) -> std::slice::Iter<'_, FileEntry> {
        self.entries.iter()
    }

    /// Entries matching `query`, see [`filter_entries`].
    pub fn filter(&self, query: &str) -> Vec<&FileEntry> {
        filter_entries(&self.entries, query)
    }
}

impl Extend<FileEntry> for Registry {
    fn extend<T: IntoIterator<Item = FileEntry>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl FromIterator<FileEntry> for Registry {
    fn from_iter<T: IntoIterator<Item = FileEntry>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a FileEntry;
    type IntoIter = std::slice::Iter<'a, FileEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
