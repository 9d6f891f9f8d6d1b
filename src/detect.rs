//! Format detection for spreadsheet files.
//!
//! Two separate questions are answered here. Candidate files are picked by
//! *name* (see [`is_supported_name`]), while the decoder picks the workbook
//! format from *content* (see [`detect_format_from_bytes`]), so a renamed file
//! still opens correctly.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::io::Cursor;

/// File extensions offered as candidates during a scan or selection.
pub const SUPPORTED_EXTENSIONS: [&str; 4] = [".xlsx", ".xls", ".xlsb", ".csv"];

/// ZIP file magic bytes: PK\x03\x04
const ZIP_MAGIC: [u8; 4] = [0x50, 0x4B, 0x03, 0x04];

/// OLE2 compound file magic used by legacy `.xls` workbooks.
const OLE_MAGIC: [u8; 8] = [0xD0, 0xCF, 0x11, 0xE0, 0xA1, 0xB1, 0x1A, 0xE1];

/// Number of leading bytes inspected when deciding whether data is text.
const TEXT_SNIFF_LEN: usize = 8192;

const UTF16_LE_BOM: &[u8] = b"\xFF\xFE";
const UTF16_BE_BOM: &[u8] = b"\xFE\xFF";

/// Detected spreadsheet format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatType {
    /// Office Open XML workbook (.xlsx, .xlsm)
    Xlsx,
    /// Binary Office workbook (.xlsb)
    Xlsb,
    /// Legacy Excel 97-2003 workbook (.xls)
    Xls,
    /// OpenDocument spreadsheet (.ods)
    Ods,
    /// Delimited text (.csv)
    Csv,
}

impl FormatType {
    /// Returns a human-readable name for this format.
    pub fn name(&self) -> &'static str {
        match self {
            FormatType::Xlsx => "Excel Workbook",
            FormatType::Xlsb => "Excel Binary Workbook",
            FormatType::Xls => "Excel 97-2003 Workbook",
            FormatType::Ods => "OpenDocument Spreadsheet",
            FormatType::Csv => "CSV Text",
        }
    }

    /// Whether the format is decoded by the workbook library rather than the
    /// CSV reader.
    pub fn is_workbook(&self) -> bool {
        !matches!(self, FormatType::Csv)
    }
}

impl std::fmt::Display for FormatType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Returns the lowercased extension of `name`, including the leading dot.
///
/// The extension starts at the last `.`; a name without a dot has none.
///
/// ```
/// use xlfind::detect::extension_of;
///
/// assert_eq!(extension_of("Budget.XLSX"), ".xlsx");
/// assert_eq!(extension_of("archive.tar.gz"), ".gz");
/// assert_eq!(extension_of("README"), "");
/// ```
pub fn extension_of(name: &str) -> String {
    match name.rfind('.') {
        Some(dot) => name[dot..].to_lowercase(),
        None => String::new(),
    }
}

/// Returns true when `name` carries one of the [`SUPPORTED_EXTENSIONS`].
pub fn is_supported_name(name: &str) -> bool {
    let ext = extension_of(name);
    SUPPORTED_EXTENSIONS.contains(&ext.as_str())
}

/// Detect the spreadsheet format from raw bytes.
///
/// ZIP containers are told apart by their workbook part, OLE2 compound files
/// are treated as legacy `.xls`, and anything without NUL bytes in its first
/// few kilobytes is read as delimited text. UTF-16 text is recognised by its
/// byte order mark.
///
/// # Example
///
/// ```
/// use xlfind::detect::{detect_format_from_bytes, FormatType};
///
/// let format = detect_format_from_bytes(b"Name,Age\nAnn,30\n")?;
/// assert_eq!(format, FormatType::Csv);
/// # Ok::<(), xlfind::Error>(())
/// ```
pub fn detect_format_from_bytes(data: &[u8]) -> Result<FormatType> {
    if is_zip_file(data) {
        return detect_zip_format(data);
    }

    if is_ole_file(data) {
        return Ok(FormatType::Xls);
    }

    if looks_like_text(data) {
        return Ok(FormatType::Csv);
    }

    Err(Error::UnknownFormat)
}

/// Inspect the part names of a ZIP container.
fn detect_zip_format(data: &[u8]) -> Result<FormatType> {
    let archive = zip::ZipArchive::new(Cursor::new(data))?;
    let names: Vec<&str> = archive.file_names().collect();

    let has = |part: &str| names.iter().any(|n| n.eq_ignore_ascii_case(part));

    if has("xl/workbook.bin") {
        Ok(FormatType::Xlsb)
    } else if has("xl/workbook.xml") {
        Ok(FormatType::Xlsx)
    } else if has("content.xml") && has("mimetype") {
        Ok(FormatType::Ods)
    } else {
        Err(Error::UnknownFormat)
    }
}

/// Check if data starts with ZIP magic bytes.
pub fn is_zip_file(data: &[u8]) -> bool {
    data.len() >= 4 && data[..4] == ZIP_MAGIC
}

/// Check if data starts with the OLE2 compound file signature.
pub fn is_ole_file(data: &[u8]) -> bool {
    data.len() >= OLE_MAGIC.len() && data[..OLE_MAGIC.len()] == OLE_MAGIC
}

fn looks_like_text(data: &[u8]) -> bool {
    if data.starts_with(UTF16_LE_BOM) || data.starts_with(UTF16_BE_BOM) {
        return true;
    }
    let sample = &data[..data.len().min(TEXT_SNIFF_LEN)];
    !sample.contains(&0)
}
