//! Recursive directory scanning.

use crate::detect::is_supported_name;
use crate::error::{Error, Result};
use crate::model::{ByteSource, FileEntry, FileHandle, Registry};
use log::{debug, warn};
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use walkdir::WalkDir;

/// One immediate child of a directory.
#[derive(Debug)]
pub enum Child {
    /// A file with a re-readable source.
    File {
        /// File name
        name: String,
        /// Byte source for the file
        source: Arc<dyn ByteSource>,
    },
    /// A subdirectory.
    Directory(Box<dyn DirectoryHandle>),
}

/// A granted directory that can list its immediate children.
pub trait DirectoryHandle: fmt::Debug + Send + Sync {
    /// Name of this directory.
    fn name(&self) -> &str;

    /// Immediate children, in whatever order the backing store yields them.
    fn children(&self) -> Result<Vec<Child>>;
}

/// Obtains a directory grant from the user.
pub trait DirectoryPicker {
    /// Handle type produced on a successful grant.
    type Handle: DirectoryHandle;

    /// Whether the running environment can pick folders at all.
    fn is_supported(&self) -> bool {
        true
    }

    /// `Ok(None)` means the user declined or cancelled.
    fn pick(&self) -> Result<Option<Self::Handle>>;
}

/// A directory on the local filesystem.
#[derive(Debug, Clone)]
pub struct FsDirectory {
    path: PathBuf,
    name: String,
}

impl FsDirectory {
    /// Open `path` as a directory handle.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !fs::metadata(path)?.is_dir() {
            return Err(Error::PickFailed(format!(
                "{} is not a directory",
                path.display()
            )));
        }
        Ok(Self::from_path(path.to_path_buf()))
    }

    fn from_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }
}

impl DirectoryHandle for FsDirectory {
    fn name(&self) -> &str {
        &self.name
    }

    fn children(&self) -> Result<Vec<Child>> {
        let mut children = Vec::new();

        let walker = WalkDir::new(&self.path)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            let file_type = entry.file_type();
            let name = entry.file_name().to_string_lossy().into_owned();

            if file_type.is_dir() {
                children.push(Child::Directory(Box::new(FsDirectory::from_path(
                    entry.into_path(),
                ))));
            } else if file_type.is_file() {
                children.push(Child::File {
                    name,
                    source: Arc::new(FileHandle::new(entry.into_path())),
                });
            } else {
                debug!("skipping non-regular entry {}", entry.path().display());
            }
        }

        Ok(children)
    }
}

/// Picks the directory at a fixed path, such as one given on the command line.
///
/// A root the process may not read counts as a declined grant.
#[derive(Debug, Clone)]
pub struct PathPicker {
    path: PathBuf,
}

impl PathPicker {
    /// Create a picker for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DirectoryPicker for PathPicker {
    type Handle = FsDirectory;

    fn pick(&self) -> Result<Option<FsDirectory>> {
        match fs::read_dir(&self.path) {
            Ok(_) => FsDirectory::open(&self.path).map(Some),
            Err(e) if e.kind() == io::ErrorKind::PermissionDenied => {
                debug!("read permission denied for {}", self.path.display());
                Ok(None)
            }
            Err(e) => Err(Error::PickFailed(format!("{}: {}", self.path.display(), e))),
        }
    }
}

/// Append every supported file below `root` to `registry`.
///
/// Paths are the `/`-joined directory chain from `root` to the file. Every
/// subdirectory is descended into; one that cannot be listed is skipped with a
/// warning, while a failure listing `root` itself is returned.
pub fn scan_directory<D>(root: &D, registry: &mut Registry) -> Result<()>
where
    D: DirectoryHandle + ?Sized,
{
    let children = root.children()?;
    debug!("scanning {} ({} children)", root.name(), children.len());
    scan_children(children, "", registry);
    Ok(())
}

fn scan_children(children: Vec<Child>, base: &str, registry: &mut Registry) {
    for child in children {
        match child {
            Child::File { name, source } => {
                if is_supported_name(&name) {
                    let path = join_path(base, &name);
                    registry.push(FileEntry::new(name, path, source));
                }
            }
            Child::Directory(dir) => {
                let path = join_path(base, dir.name());
                match dir.children() {
                    Ok(grandchildren) => scan_children(grandchildren, &path, registry),
                    Err(e) => warn!("skipping unreadable directory {}: {}", path, e),
                }
            }
        }
    }
}

fn join_path(base: &str, name: &str) -> String {
    if base.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", base, name)
    }
}
