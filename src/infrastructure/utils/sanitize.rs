/// HTML-entity-escape user text. Escaping instead of stripping keeps the
/// literal content readable in the relayed email while neutralizing markup.
pub fn escape_html(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
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

/// Escape and trim a user-supplied field for inclusion in outbound mail.
pub fn clean_text(value: &str) -> String {
    escape_html(value).trim().to_string()
}
