//! Output rendering for worksheets.
//!
//! This module provides renderers for converting a decoded [`Worksheet`]
//! to an HTML table, aligned plain text, or JSON, plus a standalone page for a
//! whole finder session.
//!
//! # Example
//!
//! ```no_run
//! use xlfind::render::*;
//! use xlfind::workbook::Workbook;
//!
//! let mut workbook = Workbook::from_bytes(std::fs::read("people.xlsx")?)?;
//! let sheet = workbook.first_worksheet()?;
//!
//! // Render to an HTML table
//! let html = to_html(&sheet, &RenderOptions::default());
//!
//! // Render to plain text
//! let text = to_text(&sheet, &RenderOptions::default());
//!
//! // Render to JSON
//! let json = to_json(&sheet, JsonFormat::Pretty)?;
//! # Ok::<(), xlfind::Error>(())
//! ```
//!
//! [`Worksheet`]: crate::model::Worksheet

mod html;
mod json;
mod options;
mod page;
mod text;

pub use html::{escape_html, to_html};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_NO_DATA_TEXT, DEFAULT_TABLE_CLASS};
pub use page::render_page;
pub use text::to_text;
