//! Plain text renderer implementation.

use crate::model::Worksheet;
use unicode_width::UnicodeWidthStr;

use super::options::RenderOptions;

/// Render a worksheet as column-aligned plain text.
///
/// Columns are padded by display width, so CJK text lines up in a terminal.
/// The header row is followed by a dashed rule.
pub fn to_text(sheet: &Worksheet, options: &RenderOptions) -> String {
    if sheet.is_empty() {
        return options.no_data_text.clone();
    }

    let limit = 1 + options.body_row_limit(sheet.body().len());
    let rows: Vec<Vec<String>> = sheet.rows[..limit]
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| cell.to_string().replace(['\r', '\n'], " "))
                .collect()
        })
        .collect();

    let column_count = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; column_count];
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut output = String::new();
    for (r, row) in rows.iter().enumerate() {
        let mut line = String::new();
        for (i, width) in widths.iter().enumerate() {
            if i > 0 {
                line.push_str(" | ");
            }
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            line.push_str(cell);
            line.push_str(&" ".repeat(width - cell.width()));
        }
        output.push_str(line.trim_end());
        output.push('\n');

        if r == 0 {
            let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
            output.push_str(&rule.join("-+-"));
            output.push('\n');
        }
    }

    output.trim_end().to_string()
}
