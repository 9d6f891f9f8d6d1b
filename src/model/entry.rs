//! File entry model structures.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Something that can hand out the raw bytes of a candidate file.
pub trait ByteSource: Send + Sync + fmt::Debug {
    /// Read the complete contents.
    fn read_bytes(&self) -> Result<Vec<u8>>;
}

/// A live reference to a file on disk, re-read on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileHandle {
    path: PathBuf,
}

impl FileHandle {
    /// Create a handle for `path`. The file is not touched until read.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ByteSource for FileHandle {
    fn read_bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::MissingSource(self.path.display().to_string()),
            _ => Error::Io(e),
        })
    }
}

/// Bytes that were materialized once when the user selected the file.
#[derive(Clone, PartialEq, Eq)]
pub struct Blob {
    data: Arc<[u8]>,
}

impl Blob {
    /// Wrap already-read bytes.
    pub fn new(data: impl Into<Arc<[u8]>>) -> Self {
        Self { data: data.into() }
    }

    /// Size in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the blob holds no bytes.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

impl fmt::Debug for Blob {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Blob").field("len", &self.data.len()).finish()
    }
}

impl ByteSource for Blob {
    fn read_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.data.to_vec())
    }
}

/// One discovered candidate spreadsheet or CSV file.
///
/// The byte source is fixed at construction; there is no setter.
#[derive(Debug, Clone)]
pub struct FileEntry {
    name: String,
    path: String,
    source: Arc<dyn ByteSource>,
}

impl FileEntry {
    /// Create an entry. `path` may be empty when unknown.
    pub fn new(
        name: impl Into<String>,
        path: impl Into<String>,
        source: Arc<dyn ByteSource>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            source,
        }
    }

    /// Display file name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display path relative to the scan root or selection, possibly empty.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path when known, otherwise the name.
    pub fn label(&self) -> &str {
        if self.path.is_empty() {
            &self.name
        } else {
            &self.path
        }
    }

    /// The backing byte source.
    pub fn source(&self) -> &Arc<dyn ByteSource> {
        &self.source
    }

    /// Read the entry's bytes from its source.
    pub fn read_bytes(&self) -> Result<Vec<u8>> {
        self.source.read_bytes()
    }

    /// Serializable name/path view of this entry.
    pub fn info(&self) -> EntryInfo {
        EntryInfo {
            name: self.name.clone(),
            path: self.path.clone(),
        }
    }
}

/// Display metadata of an entry, without its byte source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryInfo {
    /// Display file name
    pub name: String,

    /// Display path (empty when unknown)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub path: String,
}
