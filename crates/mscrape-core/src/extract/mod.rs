//! Heuristic field extraction from profile markup.
//!
//! Each field is resolved by an ordered chain of strategies, most specific
//! first (structured metadata, then semi-structured markup, then free text).
//! The first strategy yielding a non-empty value wins. Extraction never
//! fails: malformed markup degrades to empty or absent fields.

mod contact;
mod dom;
mod snippet;
mod title;

use scraper::Html;

use crate::record::split_email;

pub use contact::{find_email, find_location};

/// Raw fields pulled out of one page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedFields {
    pub title: String,
    pub snippet: String,
    pub email: Option<String>,
    pub location: Option<String>,
}

impl ExtractedFields {
    /// Lowercased part after `@` in `email`.
    pub fn email_domain(&self) -> Option<String> {
        self.email
            .as_deref()
            .and_then(split_email)
            .map(|(_, domain)| domain)
    }
}

/// Extracts title, snippet, email and location from `markup`.
pub fn extract(markup: &str) -> ExtractedFields {
    let doc = Html::parse_document(markup);

    let title = title::resolve_title(&doc);
    let snippet = snippet::resolve_snippet(&doc);
    let text = dom::visible_text(&doc);

    let haystack = [title.as_str(), snippet.as_str(), text.as_str()]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ");
    let email = find_email(&haystack);
    let location = find_location(&text);

    ExtractedFields {
        title,
        snippet,
        email,
        location,
    }
}
