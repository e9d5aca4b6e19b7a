//! Classify HTTP status and curl errors as transient or permanent.

use super::error::FetchError;

/// Whether retrying can plausibly fix a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureClass {
    Transient,
    Permanent,
}

/// Classify an HTTP status code. Only server-side errors are failures;
/// everything below 500 goes back to the caller as a response.
pub fn classify_http_status(code: u32) -> Option<FailureClass> {
    if code >= 500 {
        Some(FailureClass::Transient)
    } else {
        None
    }
}

/// Classify a curl error.
///
/// Malformed URLs, unsupported protocols and unresolvable hosts will fail the
/// same way on every attempt. Any other transport failure is transient.
pub fn classify_curl_error(e: &curl::Error) -> FailureClass {
    if e.is_url_malformed()
        || e.is_unsupported_protocol()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_too_many_redirects()
        || e.is_bad_content_encoding()
    {
        return FailureClass::Permanent;
    }
    FailureClass::Transient
}

/// Classify a fetch error.
pub fn classify(e: &FetchError) -> FailureClass {
    match e {
        FetchError::Curl(ce) => classify_curl_error(ce),
        FetchError::ServerStatus(code) => {
            classify_http_status(*code).unwrap_or(FailureClass::Permanent)
        }
    }
}
