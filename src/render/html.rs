//! HTML table renderer implementation.

use crate::model::{CellValue, Worksheet};

use super::options::RenderOptions;

/// Escape `& < > " '` for safe insertion into HTML text or attributes.
///
/// ```
/// use xlfind::render::escape_html;
///
/// assert_eq!(escape_html("<b>\"Tom\" & 'Jerry'</b>"),
///            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Render a worksheet as an HTML table.
///
/// Row 0 becomes the `<thead>` row and the remaining rows the `<tbody>`. A
/// sheet without rows renders the no-data placeholder paragraph instead.
pub fn to_html(sheet: &Worksheet, options: &RenderOptions) -> String {
    let Some(header) = sheet.header() else {
        return format!("<p>{}</p>", escape_html(&options.no_data_text));
    };

    let mut html = format!(
        "<table class=\"{}\"><thead><tr>",
        escape_html(&options.table_class)
    );
    for cell in header {
        push_cell(&mut html, "th", cell);
    }
    html.push_str("</tr></thead><tbody>");

    let body = sheet.body();
    for row in &body[..options.body_row_limit(body.len())] {
        html.push_str("<tr>");
        for cell in row {
            push_cell(&mut html, "td", cell);
        }
        html.push_str("</tr>");
    }

    html.push_str("</tbody></table>");
    html
}

fn push_cell(html: &mut String, tag: &str, cell: &CellValue) {
    html.push('<');
    html.push_str(tag);
    html.push('>');
    html.push_str(&escape_html(&cell.to_string()));
    html.push_str("</");
    html.push_str(tag);
    html.push('>');
}
