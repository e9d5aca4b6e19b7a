//! Snippet (bio) resolution chain.

use scraper::Html;

use super::dom::{element_text, meta_content, selector};

/// Metadata names checked in order, each by `name` and then `property`.
const DESCRIPTION_META: &[&str] = &["description", "og:description", "twitter:description"];

/// Block elements scanned when no metadata description exists.
const BLOCK_SELECTOR: &str = "p, h2, h3";
const MAX_BLOCKS: usize = 40;
const MIN_BLOCK_CHARS: usize = 20;
const MAX_BLOCK_CHARS: usize = 280;

#[derive(Debug, Clone, Copy)]
enum SnippetSource {
    Meta(&'static str),
    TextBlocks,
}

impl SnippetSource {
    fn extract(self, doc: &Html) -> Option<String> {
        match self {
            SnippetSource::Meta(name) => meta_content(doc, "name", name)
                .or_else(|| meta_content(doc, "property", name)),
            SnippetSource::TextBlocks => {
                let sel = selector(BLOCK_SELECTOR)?;
                doc.select(&sel).take(MAX_BLOCKS).find_map(|el| {
                    let text = element_text(&el);
                    let len = text.chars().count();
                    (MIN_BLOCK_CHARS..=MAX_BLOCK_CHARS)
                        .contains(&len)
                        .then_some(text)
                })
            }
        }
    }
}

fn snippet_order() -> impl Iterator<Item = SnippetSource> {
    DESCRIPTION_META
        .iter()
        .map(|&name| SnippetSource::Meta(name))
        .chain(std::iter::once(SnippetSource::TextBlocks))
}

/// First non-empty snippet, or an empty string.
pub(super) fn resolve_snippet(doc: &Html) -> String {
    snippet_order()
        .find_map(|source| source.extract(doc))
        .unwrap_or_default()
}
