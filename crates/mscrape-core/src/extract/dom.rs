//! Small helpers over the parsed document.

use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text is never shown to a reader.
const HIDDEN_TAGS: &[&str] = &["script", "style", "noscript", "template"];

/// Parses a CSS selector; `None` on invalid input so callers can skip it.
pub(super) fn selector(css: &str) -> Option<Selector> {
    Selector::parse(css).ok()
}

/// Entity-decodes and trims a candidate value; `None` when nothing is left.
pub(super) fn clean(raw: &str) -> Option<String> {
    let decoded = html_escape::decode_html_entities(raw);
    let trimmed = decoded.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// `content` of the first `<meta {attr}="{value}">` with non-empty content.
pub(super) fn meta_content(doc: &Html, attr: &str, value: &str) -> Option<String> {
    let sel = selector(&format!("meta[{attr}=\"{value}\"]"))?;
    doc.select(&sel)
        .filter_map(|el| el.value().attr("content"))
        .find_map(clean)
}

/// Text of an element: each text node trimmed, joined with single spaces.
pub(super) fn element_text(el: &ElementRef<'_>) -> String {
    el.text()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text a reader could see: every text node outside script/style/etc.,
/// trimmed and joined with single spaces.
pub(super) fn visible_text(doc: &Html) -> String {
    let mut parts: Vec<&str> = Vec::new();
    for node in doc.tree.root().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };
        let hidden = node.ancestors().any(|a| {
            a.value()
                .as_element()
                .is_some_and(|e| HIDDEN_TAGS.contains(&e.name()))
        });
        if hidden {
            continue;
        }
        let t = text.trim();
        if !t.is_empty() {
            parts.push(t);
        }
    }
    parts.join(" ")
}
