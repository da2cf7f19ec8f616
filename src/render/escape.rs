/// Escapes text for use inside element content or a quoted attribute.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escaped `href`/`src` value. Script-capable schemes collapse to `#`.
pub fn escape_url(url: &str) -> String {
    let url = url.trim();
    let scheme: String = url
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && !c.is_ascii_control())
        .take(16)
        .collect::<String>()
        .to_ascii_lowercase();

    if scheme.starts_with("javascript:")
        || scheme.starts_with("vbscript:")
        || (scheme.starts_with("data:") && !scheme.starts_with("data:image/"))
    {
        return "#".to_string();
    }

    escape_html(url)
}

/// Value for a CSS declaration inside a `style` attribute.
pub fn escape_css(value: &str) -> String {
    escape_html(&crate::theme::sanitize_css_value(value))
}

/// Value for `url(...)` inside a `style` attribute.
pub fn escape_css_url(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| {
            !matches!(c, '\'' | '"' | '(' | ')' | '\\' | ';' | '{' | '}' | '<' | '>')
                && !c.is_control()
        })
        .collect();
    escape_url(&cleaned)
}

/// Lowercase `[a-z0-9-]` token usable in a class name or HTML comment, or
/// `fallback` when nothing usable remains.
pub fn class_token(value: &str, fallback: &str) -> String {
    crate::models::slugify_or(value, fallback)
}

/// JSON literal safe to embed inside an inline `<script>`.
pub fn script_json(value: &serde_json::Value) -> String {
    value
        .to_string()
        .replace("</", "<\\/")
        .replace("<!--", "<\\!--")
}
