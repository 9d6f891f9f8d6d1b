//! Discovering candidate files.
//!
//! Two routes fill a [`Registry`](crate::model::Registry): a recursive scan of
//! a granted directory, whose entries re-read the disk when opened, and an
//! explicit file selection, whose entries carry their bytes.
//!
//! # Example
//!
//! ```no_run
//! use xlfind::model::Registry;
//! use xlfind::scan::{scan_directory, FsDirectory};
//!
//! let root = FsDirectory::open("shared/reports")?;
//! let mut registry = Registry::new();
//! scan_directory(&root, &mut registry)?;
//!
//! for entry in &registry {
//!     println!("{}", entry.path());
//! }
//! # Ok::<(), xlfind::Error>(())
//! ```

mod directory;
mod selection;

pub use directory::{
    scan_directory, Child, DirectoryHandle, DirectoryPicker, FsDirectory, PathPicker,
};
pub use selection::{select_files, SelectedFile};
