//! JSON renderer implementation.

use crate::error::Result;
use crate::model::Worksheet;

/// JSON output format options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonFormat {
    /// Compact single-line JSON
    Compact,
    /// Pretty-printed with 2-space indentation
    #[default]
    Pretty,
}

/// Convert a Worksheet to JSON: its name and the raw row values.
pub fn to_json(sheet: &Worksheet, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Compact => serde_json::to_string(sheet)?,
        JsonFormat::Pretty => serde_json::to_string_pretty(sheet)?,
    };
    Ok(json)
}
