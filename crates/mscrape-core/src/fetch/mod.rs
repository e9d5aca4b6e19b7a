//! HTTP GET of profile pages.
//!
//! Uses the curl crate (libcurl) in the calling thread. One GET per attempt;
//! 5xx responses and transport failures are retried according to a
//! `RetryPolicy`, everything else is handed back to the caller as a `RawPage`.

mod parse;
mod request;

use std::time::Duration;

use crate::retry::{run_with_retry, FetchError, RetryPolicy};

pub use parse::is_markup_content_type;

/// Fetched response: final status, content type and decoded body.
#[derive(Debug, Clone)]
pub struct RawPage {
    /// URL that was requested.
    pub url: String,
    /// Status of the final response (after redirects).
    pub status: u32,
    /// `Content-Type` of the final response, if sent.
    pub content_type: Option<String>,
    /// Body decoded as UTF-8 (lossy).
    pub body: String,
}

impl RawPage {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Per-request parameters.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Whole-transfer timeout for one attempt.
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(15),
            user_agent: "Mozilla/5.0".to_string(),
        }
    }
}

/// Source of profile pages. The pipeline only depends on this trait.
pub trait PageSource {
    fn fetch(&self, url: &str) -> Result<RawPage, FetchError>;
}

/// Production page source: curl GET wrapped in the retry loop.
#[derive(Debug, Clone, Default)]
pub struct HttpFetcher {
    options: FetchOptions,
    policy: RetryPolicy,
}

impl HttpFetcher {
    pub fn new(options: FetchOptions, policy: RetryPolicy) -> Self {
        Self { options, policy }
    }

    pub fn options(&self) -> &FetchOptions {
        &self.options
    }

    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }
}

impl PageSource for HttpFetcher {
    fn fetch(&self, url: &str) -> Result<RawPage, FetchError> {
        tracing::debug!(url, "fetching");
        run_with_retry(&self.policy, || request::get_once(url, &self.options).into())
    }
}

/// Fetches `url` with the default retry policy.
pub fn fetch_page(url: &str, timeout: Duration, user_agent: &str) -> Result<RawPage, FetchError> {
    let options = FetchOptions {
        timeout,
        user_agent: user_agent.to_string(),
    };
    HttpFetcher::new(options, RetryPolicy::default()).fetch(url)
}
