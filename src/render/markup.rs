use crate::core::Viewport;

/// Builds the background table: one header cell per unit caption.
#[must_use]
pub fn background_markup<I, S>(captions: I, viewport: Viewport) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut html = format!(
        "<table border=1 rules=all width={} height={} style=\"border-collapse:collapse; table-layout:fixed;\"><tr>",
        viewport.width, viewport.height
    );
    for caption in captions {
        html.push_str("<th>");
        html.push_str(&escape_html(caption.as_ref()));
        html.push_str("</th>");
    }
    html.push_str("</tr></table>");
    html
}

#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
