//! Workbook decoding.
//!
//! Binary and zipped workbooks (xlsx, xlsm, xlsb, xls, ods) are decoded by
//! `calamine`, which picks the reader from the content. Plain text is read
//! as delimited values with the `csv` crate and exposed as a single sheet.
//! UTF-16 text (with a byte order mark) is transcoded first, and fields that
//! are not valid UTF-8 are read as Windows-1252.

use crate::detect::{detect_format_from_bytes, FormatType};
use crate::error::{Error, Result};
use crate::model::{CellValue, Worksheet};
use calamine::{open_workbook_auto_from_rs, Reader, Sheets};
use encoding_rs::{Encoding, UTF_16BE, UTF_16LE, WINDOWS_1252};
use log::debug;
use std::borrow::Cow;
use std::fmt;
use std::io::Cursor;

/// Name given to the only sheet of a CSV file.
pub const CSV_SHEET_NAME: &str = "Sheet1";

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Candidate field separators for delimited text, in tie-break order.
const DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

enum Inner {
    Sheets(Sheets<Cursor<Vec<u8>>>),
    Csv(Worksheet),
}

/// A decoded workbook.
pub struct Workbook {
    format: FormatType,
    inner: Inner,
}

impl fmt::Debug for Workbook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Workbook")
            .field("format", &self.format)
            .field("sheet_names", &self.sheet_names())
            .finish()
    }
}

impl Workbook {
    /// Decode a workbook from raw bytes, detecting the format from content.
    ///
    /// # Example
    ///
    /// ```
    /// use xlfind::workbook::Workbook;
    ///
    /// let mut workbook = Workbook::from_bytes(b"Name,Age\nAnn,30\n".to_vec())?;
    /// let sheet = workbook.first_worksheet()?;
    /// assert_eq!(sheet.rows.len(), 2);
    /// # Ok::<(), xlfind::Error>(())
    /// ```
    pub fn from_bytes(data: Vec<u8>) -> Result<Self> {
        let format = detect_format_from_bytes(&data)?;

        let inner = if format.is_workbook() {
            Inner::Sheets(open_workbook_auto_from_rs(Cursor::new(data))?)
        } else {
            Inner::Csv(parse_delimited(&data)?)
        };

        let workbook = Self { format, inner };
        debug!(
            "decoded {} with {} sheet(s)",
            workbook.format,
            workbook.sheet_names().len()
        );
        Ok(workbook)
    }

    /// The detected format.
    pub fn format(&self) -> FormatType {
        self.format
    }

    /// Sheet names in the decoder's order.
    pub fn sheet_names(&self) -> Vec<String> {
        match &self.inner {
            Inner::Sheets(sheets) => sheets.sheet_names(),
            Inner::Csv(sheet) => vec![sheet.name.clone()],
        }
    }

    /// Read one worksheet by name.
    pub fn worksheet(&mut self, name: &str) -> Result<Worksheet> {
        if !self.sheet_names().iter().any(|n| n == name) {
            return Err(Error::SheetNotFound(name.to_string()));
        }

        match &mut self.inner {
            Inner::Sheets(sheets) => {
                let range = sheets.worksheet_range(name)?;
                let rows = range
                    .rows()
                    .map(|row| row.iter().map(CellValue::from).collect())
                    .collect();
                Ok(Worksheet::with_rows(name, rows))
            }
            Inner::Csv(sheet) => Ok(sheet.clone()),
        }
    }

    /// Read the first worksheet in the decoder's sheet order.
    pub fn first_worksheet(&mut self) -> Result<Worksheet> {
        let name = self
            .sheet_names()
            .into_iter()
            .next()
            .ok_or(Error::NoSheets)?;
        self.worksheet(&name)
    }
}

/// Parse delimited text into a single worksheet of string cells.
fn parse_delimited(data: &[u8]) -> Result<Worksheet> {
    let text = transcode_utf16(data);
    let data: &[u8] = &text;
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(sniff_delimiter(data))
        .has_headers(false)
        .flexible(true)
        .from_reader(data);

    let mut rows = Vec::new();
    for record in reader.byte_records() {
        let record = record?;
        let row = record
            .iter()
            .map(|field| {
                if field.is_empty() {
                    CellValue::Empty
                } else {
                    CellValue::String(decode_field(field))
                }
            })
            .collect();
        rows.push(row);
    }

    Ok(Worksheet::with_rows(CSV_SHEET_NAME, rows))
}

/// Re-encode BOM-prefixed UTF-16 text as UTF-8; other input is returned as-is.
fn transcode_utf16(data: &[u8]) -> Cow<'_, [u8]> {
    match Encoding::for_bom(data) {
        Some((encoding, bom_len)) if encoding == UTF_16LE || encoding == UTF_16BE => {
            let (text, _) = encoding.decode_without_bom_handling(&data[bom_len..]);
            debug!("transcoded {} text to UTF-8", encoding.name());
            Cow::Owned(text.into_owned().into_bytes())
        }
        _ => Cow::Borrowed(data),
    }
}

/// UTF-8 when valid, otherwise Windows-1252 (Excel's legacy CSV export).
fn decode_field(field: &[u8]) -> String {
    match std::str::from_utf8(field) {
        Ok(s) => s.to_string(),
        Err(_) => {
            let (text, _, _) = WINDOWS_1252.decode(field);
            text.into_owned()
        }
    }
}

/// Pick the separator that occurs most often on the first line.
fn sniff_delimiter(data: &[u8]) -> u8 {
    let first_line = data.split(|&b| b == b'\n').next().unwrap_or(&[]);

    let mut best = DELIMITERS[0];
    let mut best_count = 0;
    for delim in DELIMITERS {
        let count = first_line.iter().filter(|&&b| b == delim).count();
        if count > best_count {
            best = delim;
            best_count = count;
        }
    }
    best
}
