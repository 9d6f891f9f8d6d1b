//! Entries from an explicit file selection.

use crate::detect::is_supported_name;
use crate::error::Result;
use crate::model::{Blob, FileEntry};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// A file the user picked directly, with its bytes already read.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    /// File name
    pub name: String,

    /// Path hint relative to the selection, when the picker provides one
    pub relative_path: Option<String>,

    /// File contents
    pub data: Blob,
}

impl SelectedFile {
    /// Create a selection item without a path hint.
    pub fn new(name: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            relative_path: None,
            data: Blob::new(data),
        }
    }

    /// Set the relative path hint.
    pub fn with_relative_path(mut self, path: impl Into<String>) -> Self {
        self.relative_path = Some(path.into());
        self
    }

    /// Read a local file once.
    pub fn read_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Ok(Self::new(name, data))
    }
}

/// Turn a selection into entries, keeping only supported files in input order.
///
/// The entry path is the relative path hint when present and non-empty,
/// otherwise the bare file name.
pub fn select_files<I>(files: I) -> Vec<FileEntry>
where
    I: IntoIterator<Item = SelectedFile>,
{
    files
        .into_iter()
        .filter(|file| is_supported_name(&file.name))
        .map(|file| {
            let path = match file.relative_path {
                Some(hint) if !hint.is_empty() => hint,
                _ => file.name.clone(),
            };
            FileEntry::new(file.name, path, Arc::new(file.data))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filters_by_extension_in_order() {
        let entries = select_files(vec![
            SelectedFile::new("b.csv", b"b".to_vec()),
            SelectedFile::new("notes.txt", b"n".to_vec()),
            SelectedFile::new("A.XLSX", b"a".to_vec()),
        ]);

        let names: Vec<_> = entries.iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["b.csv", "A.XLSX"]);
    }

    #[test]
    fn test_path_hint_and_fallback() {
        let entries = select_files(vec![
            SelectedFile::new("q1.xlsx", b"x".to_vec()).with_relative_path("reports/q1.xlsx"),
            SelectedFile::new("q2.xlsx", b"x".to_vec()).with_relative_path(""),
            SelectedFile::new("q3.xlsx", b"x".to_vec()),
        ]);

        let paths: Vec<_> = entries.iter().map(|e| e.path()).collect();
        assert_eq!(paths, vec!["reports/q1.xlsx", "q2.xlsx", "q3.xlsx"]);
    }

    #[test]
    fn test_blob_source_holds_bytes() {
        let entries = select_files(vec![SelectedFile::new("a.csv", b"1,2\n".to_vec())]);
        assert_eq!(entries[0].read_bytes().unwrap(), b"1,2\n");
    }

    #[test]
    fn test_read_from_disk_is_materialized_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.csv");
        fs::write(&path, "before\n").unwrap();

        let file = SelectedFile::read_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let entries = select_files(vec![file]);
        assert_eq!(entries[0].name(), "data.csv");
        assert_eq!(entries[0].read_bytes().unwrap(), b"before\n");
    }
}
