//! One GET attempt with libcurl.

use std::str;

use super::parse::parse_response_headers;
use super::{FetchOptions, RawPage};
use crate::retry::{classify_http_status, FetchError};

/// Fixed request header set, without the user agent.
const BASE_HEADERS: &[&str] = &[
    "Accept: text/html,application/xhtml+xml",
    "Accept-Language: en-US,en;q=0.9",
    "Cache-Control: no-cache",
    "Pragma: no-cache",
];

/// Header lines sent with every request.
pub(crate) fn request_headers(user_agent: &str) -> Vec<String> {
    let mut headers = Vec::with_capacity(BASE_HEADERS.len() + 1);
    headers.push(format!("User-Agent: {}", user_agent.trim()));
    headers.extend(BASE_HEADERS.iter().map(|h| h.to_string()));
    headers
}

/// Performs a single GET. Follows redirects. A 5xx final status is returned
/// as `FetchError::ServerStatus` so the retry loop can classify it; any other
/// status comes back as a page.
pub(crate) fn get_once(url: &str, opts: &FetchOptions) -> Result<RawPage, FetchError> {
    let mut header_lines: Vec<String> = Vec::new();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url)?;
    easy.get(true)?;
    easy.follow_location(true)?;
    easy.max_redirections(10)?;
    easy.timeout(opts.timeout)?;
    // Empty string: accept every encoding libcurl can decode.
    easy.accept_encoding("")?;

    let mut list = curl::easy::List::new();
    for line in request_headers(&opts.user_agent) {
        list.append(&line)?;
    }
    easy.http_headers(list)?;

    {
        let mut transfer = easy.transfer();
        transfer.header_function(|data| {
            if let Ok(s) = str::from_utf8(data) {
                header_lines.push(s.trim_end().to_string());
            }
            true
        })?;
        transfer.write_function(|data| {
            body.extend_from_slice(data);
            Ok(data.len())
        })?;
        transfer.perform()?;
    }

    let status = easy.response_code()?;
    if classify_http_status(status).is_some() {
        return Err(FetchError::ServerStatus(status));
    }

    let meta = parse_response_headers(&header_lines);
    Ok(RawPage {
        url: url.to_string(),
        status,
        content_type: meta.content_type,
        body: String::from_utf8_lossy(&body).into_owned(),
    })
}
