//! Error types for the xlfind library.

use std::io;
use thiserror::Error;

/// Result type alias for xlfind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while finding, decoding, or rendering spreadsheets.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The bytes are neither a known workbook container nor text.
    #[error("Unknown file format")]
    UnknownFormat,

    /// The spreadsheet decoder rejected the workbook.
    #[error("Workbook error: {0}")]
    Workbook(String),

    /// Error reading delimited text.
    #[error("CSV error: {0}")]
    Csv(String),

    /// Error reading a ZIP container while sniffing its format.
    #[error("ZIP archive error: {0}")]
    ZipArchive(String),

    /// The workbook decoded but contains no worksheets.
    #[error("Workbook contains no sheets")]
    NoSheets,

    /// A named worksheet does not exist in the workbook.
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// An entry lost its backing file or handle.
    #[error("No file handle available: {0}")]
    MissingSource(String),

    /// The directory grant failed for a reason other than the user declining.
    #[error("Folder pick failed: {0}")]
    PickFailed(String),

    /// Error during rendering.
    #[error("Render error: {0}")]
    Render(String),
}

impl From<calamine::Error> for Error {
    fn from(err: calamine::Error) -> Self {
        Error::Workbook(err.to_string())
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err.to_string())
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ZipArchive(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Render(format!("JSON serialization error: {}", err))
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        match err.into_io_error() {
            Some(io_err) => Error::Io(io_err),
            None => Error::Io(io::Error::other("filesystem loop detected")),
        }
    }
}
