//! Canonical profile URL: `scheme://host[:port]/path`, no query, no fragment,
//! no trailing slash.

use url::Url;

use super::CANONICAL_HOST;
use crate::error::ScrapeError;

/// Normalizes a profile URL.
///
/// Accepts `https://medium.com/@handle`, `https://pub.medium.com/@handle`,
/// `medium.com/@handle`, `@handle` or `/u/<id>`. Scheme defaults to `https`
/// and host to `medium.com`. Idempotent.
pub fn normalize_profile_url(raw: &str) -> Result<String, ScrapeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ScrapeError::invalid_input("empty URL"));
    }

    let candidate = with_scheme_and_host(trimmed);
    let parsed = Url::parse(&candidate)
        .map_err(|e| ScrapeError::invalid_input(format!("unparseable URL {trimmed:?}: {e}")))?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ScrapeError::invalid_input(format!(
            "unsupported scheme {scheme:?} in {trimmed:?}"
        )));
    }
    let host = match parsed.host_str() {
        Some(h) if !h.is_empty() => h,
        _ => return Err(ScrapeError::invalid_input(format!("no host in {trimmed:?}"))),
    };

    let mut out = format!("{scheme}://{host}");
    if let Some(port) = parsed.port() {
        out.push_str(&format!(":{port}"));
    }
    out.push_str(parsed.path().trim_end_matches('/'));
    Ok(out)
}

/// Fills in a missing scheme and, for bare paths, the canonical host.
fn with_scheme_and_host(input: &str) -> String {
    if input.contains("://") || has_scheme_prefix(input) {
        return input.to_string();
    }
    if let Some(rest) = input.strip_prefix("//") {
        return format!("https://{rest}");
    }
    if input.starts_with('/') || input.starts_with('@') {
        return format!("https://{CANONICAL_HOST}/{}", input.trim_start_matches('/'));
    }
    let first_segment = input.split(['/', '?', '#']).next().unwrap_or("");
    if looks_like_host(first_segment) {
        format!("https://{input}")
    } else {
        format!("https://{CANONICAL_HOST}/{input}")
    }
}

/// `example.com`, `pub.medium.com:8443` or `localhost:8080`.
fn looks_like_host(segment: &str) -> bool {
    match segment.rsplit_once(':') {
        Some((name, port)) => {
            !name.is_empty() && !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit())
        }
        None => segment.contains('.'),
    }
}

/// `mailto:x`, `https:host/...` but not `host:8080/...`.
fn has_scheme_prefix(input: &str) -> bool {
    match input.split_once(':') {
        Some((prefix, rest)) => {
            prefix.starts_with(|c: char| c.is_ascii_alphabetic())
                && prefix
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
                && !rest.starts_with(|c: char| c.is_ascii_digit())
        }
        None => false,
    }
}
