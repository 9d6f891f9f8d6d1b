//! Standalone HTML page for a finder session.

use crate::finder::Finder;

use super::html::escape_html;

const STYLE: &str = "body{font-family:system-ui,sans-serif;margin:2rem}\
.results{list-style:none;padding:0}\
.results li{display:flex;justify-content:space-between;border-bottom:1px solid #ddd;padding:.4rem 0}\
.path{color:#666;font-size:.85em}\
.spec-table{border-collapse:collapse}\
.spec-table th,.spec-table td{border:1px solid #ccc;padding:.25rem .5rem;text-align:left}";

/// Render the finder's visible list, status line and table as one HTML document.
///
/// Every entry name and path is escaped; the table markup is taken from the
/// finder's display as-is, since it is escaped when rendered.
pub fn render_page(finder: &Finder, title: &str) -> String {
    let mut html = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    html.push_str(&format!("<style>{}</style>\n", STYLE));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape_html(title)));

    if !finder.query().trim().is_empty() {
        html.push_str(&format!(
            "<p id=\"searchQuery\">Search: <code>{}</code></p>\n",
            escape_html(finder.query())
        ));
    }

    html.push_str(&format!(
        "<p id=\"fileCount\">{}</p>\n",
        escape_html(&finder.count_label())
    ));
    html.push_str("<ul id=\"fileResults\" class=\"results\">\n");
    for (i, entry) in finder.visible().iter().enumerate() {
        html.push_str(&format!(
            "<li data-index=\"{}\"><div><div><strong>{}</strong></div><div class=\"path\">{}</div></div></li>\n",
            i,
            escape_html(entry.name()),
            escape_html(entry.path())
        ));
    }
    html.push_str("</ul>\n");

    html.push_str(&format!(
        "<p id=\"excelInfo\">{}</p>\n",
        escape_html(finder.info())
    ));
    html.push_str("<div id=\"excelTableWrap\">");
    if let Some(table) = finder.display() {
        html.push_str(table);
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}
