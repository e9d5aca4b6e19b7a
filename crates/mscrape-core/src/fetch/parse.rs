//! Parse HTTP response header lines.

/// Header values of interest from the final response.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct ResponseMeta {
    pub content_type: Option<String>,
}

/// Parse collected header lines. With redirects, libcurl reports the headers
/// of every hop; a status line starts a new response, so only the last
/// response's values survive.
pub(crate) fn parse_response_headers(lines: &[String]) -> ResponseMeta {
    let mut meta = ResponseMeta::default();

    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line.starts_with("HTTP/") {
            meta = ResponseMeta::default();
            continue;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("content-type") {
                meta.content_type = Some(value.trim().to_string());
            }
        }
    }

    meta
}

/// True when the content type looks like markup (`text/html`,
/// `application/xhtml+xml`, ...).
pub fn is_markup_content_type(content_type: &str) -> bool {
    content_type.to_ascii_lowercase().contains("html")
}
