// HTML document shell shared by every page

use std::fmt::Write;

/// Wrap body markup in a complete HTML5 document
pub fn render_document(title: &str, body: &str) -> String {
    let mut html = String::with_capacity(body.len() + 256);

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    html.push_str("</head>\n<body>\n");
    html.push_str(body);
    html.push_str("\n</body>\n</html>\n");

    html
}

/// Fallback page shown when a page's data could not be loaded
pub fn render_error_page(title: &str, detail: &str) -> String {
    let body = format!(
        "<main class=\"p-4\"><h1 class=\"text-2xl font-bold\">{}</h1><p>{}</p></main>",
        escape_html(title),
        escape_html(detail)
    );

    render_document(title, &body)
}

/// Escape text for use in element content and quoted attribute values
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}
