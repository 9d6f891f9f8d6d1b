//! Rendering options configuration.

/// Class attribute put on rendered tables.
pub const DEFAULT_TABLE_CLASS: &str = "spec-table";

/// Placeholder text for a worksheet without rows.
pub const DEFAULT_NO_DATA_TEXT: &str = "No data.";

/// Options for rendering worksheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// CSS class of the `<table>` element
    pub table_class: String,

    /// Text shown instead of a table when the sheet has no rows
    pub no_data_text: String,

    /// Maximum number of body rows to render (None = all)
    pub max_rows: Option<usize>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            table_class: DEFAULT_TABLE_CLASS.to_string(),
            no_data_text: DEFAULT_NO_DATA_TEXT.to_string(),
            max_rows: None,
        }
    }
}

impl RenderOptions {
    /// Create new render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the table CSS class.
    pub fn with_table_class(mut self, class: impl Into<String>) -> Self {
        self.table_class = class.into();
        self
    }

    /// Set the placeholder for empty sheets.
    pub fn with_no_data_text(mut self, text: impl Into<String>) -> Self {
        self.no_data_text = text.into();
        self
    }

    /// Cap the number of body rows. The header row is always rendered.
    pub fn with_max_rows(mut self, max_rows: Option<usize>) -> Self {
        self.max_rows = max_rows;
        self
    }

    /// Number of body rows to render out of `available`.
    pub(crate) fn body_row_limit(&self, available: usize) -> usize {
        self.max_rows.map_or(available, |max| max.min(available))
    }
}
