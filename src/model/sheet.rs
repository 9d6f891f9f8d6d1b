//! Worksheet model structures.

use serde::Serialize;
use std::fmt;

/// A raw cell value as extracted by the decoder.
///
/// No coercion happens beyond what the decoder does itself: dates stay Excel
/// serial numbers and CSV fields stay strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum CellValue {
    /// No value
    #[default]
    Empty,
    /// Text
    String(String),
    /// Integer number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// Boolean
    Bool(bool),
    /// Date or time as an Excel serial number
    DateTime(f64),
    /// ISO 8601 date/time text (OpenDocument)
    DateTimeIso(String),
    /// ISO 8601 duration text (OpenDocument)
    DurationIso(String),
    /// Excel error literal such as `#DIV/0!`
    Error(String),
}

impl CellValue {
    /// Whether the cell holds no value.
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::String(s)
            | CellValue::DateTimeIso(s)
            | CellValue::DurationIso(s)
            | CellValue::Error(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{}", n),
            CellValue::Float(n) | CellValue::DateTime(n) => write!(f, "{}", n),
            CellValue::Bool(b) => write!(f, "{}", b),
        }
    }
}

impl From<&calamine::Data> for CellValue {
    fn from(value: &calamine::Data) -> Self {
        use calamine::Data;

        match value {
            Data::Empty => CellValue::Empty,
            Data::String(s) => CellValue::String(s.clone()),
            Data::Int(n) => CellValue::Int(*n),
            Data::Float(n) => CellValue::Float(*n),
            Data::Bool(b) => CellValue::Bool(*b),
            Data::DateTime(dt) => CellValue::DateTime(dt.as_f64()),
            Data::DateTimeIso(s) => CellValue::DateTimeIso(s.clone()),
            Data::DurationIso(s) => CellValue::DurationIso(s.clone()),
            Data::Error(e) => CellValue::Error(e.to_string()),
        }
    }
}

/// A single worksheet as row-major raw values.
///
/// Row 0 is the header row when rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Worksheet {
    /// Sheet name
    pub name: String,

    /// Rows of cell values
    pub rows: Vec<Vec<CellValue>>,
}

impl Worksheet {
    /// Create an empty worksheet.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Create a worksheet from rows.
    pub fn with_rows(name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Whether the sheet has no rows at all.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The first row, if any.
    pub fn header(&self) -> Option<&[CellValue]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// Rows after the header.
    pub fn body(&self) -> &[Vec<CellValue>] {
        self.rows.get(1..).unwrap_or(&[])
    }
}
