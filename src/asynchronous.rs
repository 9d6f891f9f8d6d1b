//! Async wrappers for front ends running on a Tokio executor.
//!
//! Directory traversal, byte reads and decoding are blocking work; these
//! helpers move them onto Tokio's blocking pool so the event loop keeps
//! running while they are in flight.

use crate::error::{Error, Result};
use crate::model::{FileEntry, Registry, Worksheet};
use crate::scan::{scan_directory, DirectoryPicker, PathPicker};
use crate::workbook::Workbook;
use std::io;
use std::path::PathBuf;

async fn blocking<T, F>(f: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| Error::Io(io::Error::other(e)))?
}

/// Scan the directory at `path`.
///
/// Returns `Ok(None)` when read permission on the root is denied.
pub async fn scan_path(path: impl Into<PathBuf>) -> Result<Option<Registry>> {
    let picker = PathPicker::new(path);
    blocking(move || {
        let Some(root) = picker.pick()? else {
            return Ok(None);
        };
        let mut registry = Registry::new();
        scan_directory(&root, &mut registry)?;
        Ok(Some(registry))
    })
    .await
}

/// Read an entry's bytes.
pub async fn read_entry(entry: &FileEntry) -> Result<Vec<u8>> {
    let source = entry.source().clone();
    blocking(move || source.read_bytes()).await
}

/// Read and decode an entry, returning its first worksheet.
pub async fn first_worksheet(entry: &FileEntry) -> Result<Worksheet> {
    let source = entry.source().clone();
    blocking(move || Workbook::from_bytes(source.read_bytes()?)?.first_worksheet()).await
}
