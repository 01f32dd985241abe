use folio_core::panel::PanelContent;

/// Minimal escaping for text placed inside element content.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Inner HTML of the panel content area for one tab.
pub fn panel_html(content: &PanelContent) -> String {
    let mut html = format!(
        "<h2 class=\"panel-title\">{}</h2>",
        escape_html(content.title)
    );
    for (i, section) in content.sections.iter().enumerate() {
        if i > 0 {
            html.push_str("<div class=\"panel-divider\"></div>");
        }
        html.push_str(&format!(
            "<section class=\"panel-section\"><h3>{}</h3><p>{}</p></section>",
            escape_html(section.heading),
            escape_html(section.body)
        ));
    }
    html
}
