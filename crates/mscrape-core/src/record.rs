//! Immutable profile record and its builder.

use serde::Serialize;

use crate::extract::ExtractedFields;
use crate::url_model::displayed_url;

/// Title used when no title source yields anything.
pub const UNTITLED: &str = "Untitled";

/// Source site family tag carried by every record.
pub const PLATFORM: &str = "medium";

/// Field names in record (and serialization) order.
pub const FIELD_NAMES: [&str; 8] = [
    "title",
    "url",
    "snippet",
    "email",
    "email_domain",
    "platform",
    "displayed_url",
    "location",
];

/// One extracted profile. Built once by [`build`], never mutated.
///
/// `email_domain` is present iff `email` is, and is the lowercased part
/// after `@`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileRecord {
    title: String,
    url: String,
    snippet: String,
    email: Option<String>,
    email_domain: Option<String>,
    platform: String,
    displayed_url: Option<String>,
    location: Option<String>,
}

impl ProfileRecord {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn snippet(&self) -> &str {
        &self.snippet
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn email_domain(&self) -> Option<&str> {
        self.email_domain.as_deref()
    }

    pub fn platform(&self) -> &str {
        &self.platform
    }

    pub fn displayed_url(&self) -> Option<&str> {
        self.displayed_url.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Field values in [`FIELD_NAMES`] order; absent values are `None`.
    pub fn values(&self) -> [Option<&str>; 8] {
        [
            Some(self.title.as_str()),
            Some(self.url.as_str()),
            Some(self.snippet.as_str()),
            self.email(),
            self.email_domain(),
            Some(self.platform.as_str()),
            self.displayed_url(),
            self.location(),
        ]
    }
}

/// Splits an address into local part and lowercased domain.
pub fn split_email(addr: &str) -> Option<(String, String)> {
    let (local, domain) = addr.trim().split_once('@')?;
    if local.is_empty() || domain.is_empty() {
        return None;
    }
    Some((local.to_string(), domain.to_lowercase()))
}

/// Assembles a record from a canonical URL and extracted fields.
pub fn build(url: &str, fields: ExtractedFields) -> ProfileRecord {
    let title = match fields.title.trim() {
        "" => UNTITLED.to_string(),
        t => t.to_string(),
    };
    let (email, email_domain) = match fields.email.as_deref().and_then(split_email) {
        Some((local, domain)) => (Some(format!("{local}@{domain}")), Some(domain)),
        None => (None, None),
    };
    let displayed = displayed_url(url);

    ProfileRecord {
        title,
        url: url.to_string(),
        snippet: fields.snippet,
        email,
        email_domain,
        platform: PLATFORM.to_string(),
        displayed_url: (!displayed.is_empty()).then_some(displayed),
        location: fields.location,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(email: Option<&str>) -> ExtractedFields {
        ExtractedFields {
            title: "Alice".to_string(),
            snippet: "Bio".to_string(),
            email: email.map(str::to_string),
            location: None,
        }
    }

    #[test]
    fn email_domain_follows_email() {
        let r = build("https://medium.com/@alice", fields(Some("Alice.B@Mail.Example.COM")));
        assert_eq!(r.email(), Some("Alice.B@mail.example.com"));
        assert_eq!(r.email_domain(), Some("mail.example.com"));

        let r = build("https://medium.com/@alice", fields(None));
        assert_eq!(r.email(), None);
        assert_eq!(r.email_domain(), None);
    }

    #[test]
    fn email_domain_invariant_holds() {
        for email in [None, Some("a@b.co"), Some("X@Y.Z.ORG"), Some("broken"), Some("@x.com")] {
            let r = build("https://medium.com/@x", fields(email));
            assert_eq!(r.email().is_some(), r.email_domain().is_some());
            if let (Some(e), Some(d)) = (r.email(), r.email_domain()) {
                assert_eq!(e.split_once('@').unwrap().1.to_lowercase(), d);
            }
        }
    }

    #[test]
    fn derived_fields() {
        let r = build("https://medium.com/@alice", fields(None));
        assert_eq!(r.url(), "https://medium.com/@alice");
        assert_eq!(r.platform(), "medium");
        assert_eq!(r.displayed_url(), Some("medium.com/@alice"));
        assert_eq!(r.snippet(), "Bio");
        assert_eq!(r.location(), None);
    }

    #[test]
    fn blank_title_becomes_sentinel() {
        let mut f = fields(None);
        f.title = "   ".to_string();
        assert_eq!(build("https://medium.com/@a", f).title(), UNTITLED);
    }

    #[test]
    fn serializes_in_field_order() {
        let r = build("https://medium.com/@alice", fields(None));
        let json = serde_json::to_string(&r).unwrap();
        let mut last = 0;
        for name in FIELD_NAMES {
            let pos = json.find(&format!("\"{name}\"")).unwrap();
            assert!(pos >= last, "{name} out of order");
            last = pos;
        }
        assert!(json.contains("\"email\":null"));
    }
}
