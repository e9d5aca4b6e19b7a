//! Human-facing URL form.

use url::Url;

/// `host/path` without scheme, or just `host` when the path is empty.
/// Falls back to the input with any `scheme://` prefix removed if it does not parse.
pub fn displayed_url(url: &str) -> String {
    match Url::parse(url) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or("");
            let host = match parsed.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            };
            let path = parsed.path().trim_start_matches('/');
            if path.is_empty() {
                host
            } else {
                format!("{host}/{path}")
            }
        }
        Err(_) => url
            .split_once("://")
            .map(|(_, rest)| rest)
            .unwrap_or(url)
            .to_string(),
    }
}
