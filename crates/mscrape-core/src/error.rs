//! Error taxonomy shared across the pipeline.
//!
//! `ScrapeError` covers run-level failures (bad input, bad configuration);
//! per-URL failures are `SkipReason`s and never escape the batch.

use thiserror::Error;

use crate::retry::FetchError;

/// Run-level error. `InvalidInput` is raised for malformed URLs and for
/// configuration that cannot be satisfied (e.g. an unknown export format).
#[derive(Debug, Error)]
pub enum ScrapeError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl ScrapeError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ScrapeError::InvalidInput(msg.into())
    }
}

/// Why a single profile URL produced no record.
#[derive(Debug, Error)]
pub enum SkipReason {
    /// The input could not be canonicalized.
    #[error(transparent)]
    InvalidUrl(#[from] ScrapeError),
    /// Permanent fetch failure, or the last transient one after retries ran out.
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    /// Final response status outside 2xx (not retried).
    #[error("HTTP {0}")]
    HttpStatus(u32),
    /// Response is not markup; nothing to extract.
    #[error("non-HTML content: {content_type}")]
    NonHtmlContent { content_type: String },
}
