//! Title resolution chain.

use scraper::Html;

use super::dom::{clean, meta_content, selector};
use crate::record::UNTITLED;

#[derive(Debug, Clone, Copy)]
enum TitleSource {
    /// `<meta property="og:title">`
    OpenGraph,
    /// `<meta name="twitter:title">`
    TwitterCard,
    /// `<title>`
    Document,
}

const TITLE_ORDER: &[TitleSource] = &[
    TitleSource::OpenGraph,
    TitleSource::TwitterCard,
    TitleSource::Document,
];

impl TitleSource {
    fn extract(self, doc: &Html) -> Option<String> {
        match self {
            TitleSource::OpenGraph => meta_content(doc, "property", "og:title"),
            TitleSource::TwitterCard => meta_content(doc, "name", "twitter:title"),
            TitleSource::Document => {
                let sel = selector("title")?;
                let el = doc.select(&sel).next()?;
                clean(&el.text().collect::<String>())
            }
        }
    }
}

/// First non-empty title in `TITLE_ORDER`, or "Untitled".
pub(super) fn resolve_title(doc: &Html) -> String {
    TITLE_ORDER
        .iter()
        .find_map(|source| source.extract(doc))
        .unwrap_or_else(|| UNTITLED.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn title_of(html: &str) -> String {
        resolve_title(&Html::parse_document(html))
    }

    #[test]
    fn og_title_wins() {
        let html = r#"<head><title>Doc</title>
            <meta name="twitter:title" content="Tw">
            <meta property="og:title" content="OG"></head>"#;
        assert_eq!(title_of(html), "OG");
    }

    #[test]
    fn twitter_title_only() {
        let html = r#"<html><head><meta name="twitter:title" content="  Bob &amp; Co  "></head><body></body></html>"#;
        assert_eq!(title_of(html), "Bob & Co");
    }

    #[test]
    fn empty_og_falls_through_to_document_title() {
        let html = r#"<head><meta property="og:title" content=" "><title> Carol
            – Medium </title></head>"#;
        assert_eq!(title_of(html), "Carol\n            – Medium");
    }

    #[test]
    fn og_title_under_name_attribute_is_ignored() {
        let html = r#"<head><meta name="og:title" content="wrong attr"></head>"#;
        assert_eq!(title_of(html), "Untitled");
    }

    #[test]
    fn sentinel_when_nothing_found() {
        assert_eq!(title_of("<p>no title</p>"), "Untitled");
    }
}
