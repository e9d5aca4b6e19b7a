//! Free-text heuristics: contact email and location.

use regex::Regex;
use std::sync::LazyLock;

static RE_EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9_.+-]+@[A-Za-z0-9-]+\.[A-Za-z0-9.-]+").unwrap());

static RE_LOCATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(?:Based in|Location[: ]+)([^|·\n\r]{2,50})").unwrap());

/// Addresses containing one of these belong to the platform itself.
const INTERNAL_MARKERS: &[&str] = &[".medium."];

const MIN_LOCATION_CHARS: usize = 2;
const MAX_LOCATION_CHARS: usize = 50;

/// First email-like match in `text` that is not a platform-internal address.
/// Sentence punctuation swallowed by the pattern (trailing dots) is dropped.
pub fn find_email(text: &str) -> Option<String> {
    RE_EMAIL
        .find_iter(text)
        .map(|m| m.as_str().trim_end_matches('.'))
        .filter(|addr| {
            addr.split_once('@')
                .is_some_and(|(_, domain)| domain.contains('.'))
        })
        .find(|addr| {
            let lower = addr.to_lowercase();
            !INTERNAL_MARKERS.iter().any(|m| lower.contains(m))
        })
        .map(str::to_string)
}

/// Text after "Based in" or "Location", up to the next separator,
/// trimmed of surrounding punctuation. `None` when out of bounds.
pub fn find_location(text: &str) -> Option<String> {
    let caps = RE_LOCATION.captures(text)?;
    let location = caps
        .get(1)?
        .as_str()
        .trim_matches(|c: char| c.is_whitespace() || matches!(c, ':' | '·' | '|' | '-'));
    let len = location.chars().count();
    if (MIN_LOCATION_CHARS..=MAX_LOCATION_CHARS).contains(&len) {
        Some(location.to_string())
    } else {
        None
    }
}
