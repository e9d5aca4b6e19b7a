//! Sequential scrape of an ordered URL list.
//!
//! normalize → fetch → status/content-type check → extract → build, one URL
//! at a time. A failure on one URL is recorded as a skip and never aborts the
//! batch. Output order follows input order.

mod item;

use std::time::Duration;

use crate::error::SkipReason;
use crate::fetch::{FetchOptions, HttpFetcher, PageSource};
use crate::record::ProfileRecord;
use crate::retry::RetryPolicy;

pub use item::scrape_profile;

/// A URL that produced no record, and why.
#[derive(Debug)]
pub struct Skipped {
    /// The URL as given in the input.
    pub url: String,
    pub reason: SkipReason,
}

/// Result of one run: records in input order plus skipped URLs.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    pub records: Vec<ProfileRecord>,
    pub skipped: Vec<Skipped>,
}

/// Scrapes `urls` in order through `source`, stopping once `max_items`
/// records have been built.
pub fn run<S, I>(urls: I, max_items: usize, source: &S) -> ScrapeReport
where
    S: PageSource + ?Sized,
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut report = ScrapeReport::default();
    for raw in urls {
        if report.records.len() >= max_items {
            tracing::info!(max_items, "item cap reached, remaining URLs not fetched");
            break;
        }
        let raw = raw.as_ref();
        match scrape_profile(source, raw) {
            Ok(record) => report.records.push(record),
            Err(reason) => {
                tracing::warn!(url = raw, reason = %reason, "skipping profile");
                report.skipped.push(Skipped {
                    url: raw.to_string(),
                    reason,
                });
            }
        }
    }
    tracing::info!(
        records = report.records.len(),
        skipped = report.skipped.len(),
        "scrape finished"
    );
    report
}

/// Runs over HTTP with the given timeout, user agent and retry policy.
pub fn run_http<I>(
    urls: I,
    max_items: usize,
    timeout: Duration,
    user_agent: &str,
    policy: RetryPolicy,
) -> ScrapeReport
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let fetcher = HttpFetcher::new(
        FetchOptions {
            timeout,
            user_agent: user_agent.to_string(),
        },
        policy,
    );
    run(urls, max_items, &fetcher)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use crate::fetch::{PageSource, RawPage};
    use crate::retry::FetchError;

    /// Canned responses keyed by canonical URL; records every request.
    #[derive(Default)]
    pub struct FakeSource {
        pages: HashMap<String, Result<RawPage, u32>>,
        pub requests: RefCell<Vec<String>>,
    }

    impl FakeSource {
        pub fn html(mut self, url: &str, status: u32, body: &str) -> Self {
            self.pages.insert(
                url.to_string(),
                Ok(RawPage {
                    url: url.to_string(),
                    status,
                    content_type: Some("text/html; charset=utf-8".to_string()),
                    body: body.to_string(),
                }),
            );
            self
        }

        pub fn typed(mut self, url: &str, content_type: &str, body: &str) -> Self {
            self.pages.insert(
                url.to_string(),
                Ok(RawPage {
                    url: url.to_string(),
                    status: 200,
                    content_type: Some(content_type.to_string()),
                    body: body.to_string(),
                }),
            );
            self
        }

        pub fn server_error(mut self, url: &str, status: u32) -> Self {
            self.pages.insert(url.to_string(), Err(status));
            self
        }
    }

    impl PageSource for FakeSource {
        fn fetch(&self, url: &str) -> Result<RawPage, FetchError> {
            self.requests.borrow_mut().push(url.to_string());
            match self.pages.get(url) {
                Some(Ok(page)) => Ok(page.clone()),
                Some(Err(status)) => Err(FetchError::ServerStatus(*status)),
                // CURLE_COULDNT_RESOLVE_HOST
                None => Err(FetchError::Curl(curl::Error::new(6))),
            }
        }
    }

    pub fn profile_html(name: &str) -> String {
        format!(
            r#"<html><head><meta property="og:title" content="{name}"></head>
<body><p>Contact {name} at {lower}@example.com</p></body></html>"#,
            lower = name.to_lowercase()
        )
    }
}
