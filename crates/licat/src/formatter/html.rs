use crate::render::{Card, ConditionFragment, PermissionSection};

/// Left margin per condition depth, in pixels.
const CONDITION_INDENT_PX: usize = 20;

const STYLE: &str = "\
body { font-family: sans-serif; margin: 2em; }
.license-card { border: 1px solid #ccc; border-radius: 4px; margin-bottom: 1em; padding: 0.5em 1em; }
.license-title { cursor: pointer; font-size: 1.4em; font-weight: bold; }
.permission-section { border-left: 3px solid #8ab; margin: 0.5em 0; padding-left: 0.8em; }
.condition-node, .condition-leaf { margin-top: 0.2em; }
.license-content { white-space: pre-wrap; background: #f6f6f6; padding: 0.8em; }
";

/// Formats cards as a standalone HTML document.
///
/// Each license is a collapsed `<details class="license-card">` whose summary
/// is the license name, so the page expands and collapses without script.
/// Text is escaped; condition fragments are indented by
/// `20px` per depth.
pub fn format_html(cards: &[Card], title: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape(title)));
    html.push_str(&format!("<style>\n{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{}</h1>\n", escape(title)));
    html.push_str("<div id=\"licenses-container\">\n");
    for card in cards {
        html.push_str(&card_html(card));
        html.push('\n');
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Markup for a single card.
pub fn card_html(card: &Card) -> String {
    let mut html = String::from("<details class=\"license-card\">");
    html.push_str(&format!(
        "<summary class=\"license-title\">{}</summary>",
        escape(&card.name)
    ));
    html.push_str("<div class=\"license-details\">");
    push_field(&mut html, "SPDX", &card.spdx);
    push_field(&mut html, "Summary", &card.summary);
    push_field(&mut html, "Description", &card.description);

    if !card.permissions.is_empty() {
        html.push_str("<h3>Permissions:</h3>");
        for permission in &card.permissions {
            push_permission(&mut html, permission);
        }
    }

    if !card.notices.is_empty() {
        html.push_str("<h3>Notices:</h3>");
        for notice in &card.notices {
            html.push_str(&format!(
                "<div class=\"notice-item\"><strong>{}</strong></div>",
                escape(&notice.label())
            ));
        }
    }

    if !card.content.is_empty() {
        html.push_str(&format!(
            "<h3>Content:</h3><pre class=\"license-content\">{}</pre>",
            escape(&card.content)
        ));
    }
    html.push_str("</div></details>");
    html
}

fn push_field(html: &mut String, label: &str, value: &str) {
    if !value.is_empty() {
        html.push_str(&format!("<p><strong>{label}:</strong> {}</p>", escape(value)));
    }
}

fn push_permission(html: &mut String, permission: &PermissionSection) {
    html.push_str("<div class=\"permission-section\">");
    push_field(html, "Summary", &permission.summary);
    push_field(html, "Description", &permission.description);
    if !permission.actions.is_empty() {
        html.push_str("<h4>Actions:</h4>");
        for action in &permission.actions {
            html.push_str(&format!(
                "<div class=\"action-item\"><strong>{}</strong></div>",
                escape(&action.label())
            ));
        }
    }
    if let Some(conditions) = &permission.conditions {
        html.push_str("<h4>Conditions:</h4>");
        push_condition(html, conditions);
    }
    html.push_str("</div>");
}

fn push_condition(html: &mut String, fragment: &ConditionFragment) {
    let margin = fragment.depth() * CONDITION_INDENT_PX;
    match fragment {
        ConditionFragment::Leaf { condition_type, .. } => {
            html.push_str(&format!(
                "<div class=\"condition-leaf\" style=\"margin-left: {margin}px;\"><strong>LEAF ({}):</strong> {}</div>",
                escape(condition_type),
                escape(&fragment.label().unwrap_or_default())
            ));
        }
        ConditionFragment::Group {
            operator, children, ..
        } => {
            html.push_str(&format!(
                "<div class=\"condition-node\" style=\"margin-left: {margin}px;\"><strong>{operator}:</strong>"
            ));
            for child in children {
                push_condition(html, child);
            }
            html.push_str("</div>");
        }
    }
}

/// Escapes the characters that are significant in HTML text and attributes.
pub fn escape(text: &str) -> String {
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
