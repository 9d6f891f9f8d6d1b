//! # xlfind
//!
//! Find local Excel and CSV files, filter them by name, and render the first
//! sheet of a chosen file as an HTML table.
//!
//! ## Quick Start
//!
//! ```no_run
//! use xlfind::{scan_path, render_file};
//!
//! // Every .xlsx/.xls/.xlsb/.csv below a folder
//! let registry = scan_path("shared/reports")?;
//! for entry in registry.filter("budget") {
//!     println!("{}", entry.path());
//! }
//!
//! // First sheet of one file as an HTML table
//! let html = render_file("shared/reports/budget.xlsx")?;
//! std::fs::write("budget.html", html)?;
//! # Ok::<(), xlfind::Error>(())
//! ```
//!
//! ## Interactive use
//!
//! [`finder::Finder`] keeps the state of a browsing session (registry, query,
//! rendered table, status line, pending notices) and turns failures into
//! user-facing notices instead of errors.
//!
//! ## Features
//!
//! - `async`: Tokio wrappers that run scans and decoding on the blocking pool

pub mod detect;
pub mod error;
pub mod filter;
pub mod finder;
pub mod model;
pub mod render;
pub mod scan;
pub mod workbook;

#[cfg(feature = "async")]
pub mod asynchronous;

// Re-exports
pub use detect::{detect_format_from_bytes, is_supported_name, FormatType, SUPPORTED_EXTENSIONS};
pub use error::{Error, Result};
pub use filter::filter_entries;
pub use finder::{Finder, Notice, Opened, Picked};
pub use model::{
    Blob, ByteSource, CellValue, EntryInfo, FileEntry, FileHandle, Registry, Worksheet,
};
pub use render::RenderOptions;
pub use scan::{DirectoryHandle, DirectoryPicker, FsDirectory, PathPicker, SelectedFile};
pub use workbook::Workbook;

use std::path::Path;

/// Scan a directory tree and return the supported files found in it.
///
/// # Example
///
/// ```no_run
/// let registry = xlfind::scan_path("shared")?;
/// println!("{} files", registry.len());
/// # Ok::<(), xlfind::Error>(())
/// ```
pub fn scan_path(path: impl AsRef<Path>) -> Result<Registry> {
    let root = FsDirectory::open(path)?;
    let mut registry = Registry::new();
    scan::scan_directory(&root, &mut registry)?;
    Ok(registry)
}

/// Decode bytes and return the first worksheet.
///
/// # Example
///
/// ```
/// let sheet = xlfind::first_worksheet_from_bytes(b"Name\nAnn\n".to_vec())?;
/// assert_eq!(sheet.rows.len(), 2);
/// # Ok::<(), xlfind::Error>(())
/// ```
pub fn first_worksheet_from_bytes(data: Vec<u8>) -> Result<Worksheet> {
    Workbook::from_bytes(data)?.first_worksheet()
}

/// Render the first sheet of `data` as an HTML table with default options.
pub fn render_bytes(data: Vec<u8>) -> Result<String> {
    let sheet = first_worksheet_from_bytes(data)?;
    Ok(render::to_html(&sheet, &RenderOptions::default()))
}

/// Render the first sheet of the file at `path` as an HTML table.
///
/// # Example
///
/// ```no_run
/// let html = xlfind::render_file("people.csv")?;
/// assert!(html.starts_with("<table") || html == "<p>No data.</p>");
/// # Ok::<(), xlfind::Error>(())
/// ```
pub fn render_file(path: impl AsRef<Path>) -> Result<String> {
    render_bytes(std::fs::read(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_bytes_csv() {
        let html = render_bytes(b"Name,Age\nAnn,30\n".to_vec()).unwrap();
        assert!(html.contains("<th>Name</th><th>Age</th>"));
        assert!(html.contains("<td>Ann</td><td>30</td>"));
    }

    #[test]
    fn test_render_bytes_empty() {
        assert_eq!(render_bytes(Vec::new()).unwrap(), "<p>No data.</p>");
    }

    #[test]
    fn test_scan_path_missing() {
        assert!(scan_path("test-files/definitely-missing").is_err());
    }
}
