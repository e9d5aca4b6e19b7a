//! Fetch error type for retry classification.

use thiserror::Error;

/// Error from a single GET attempt.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Curl reported an error (bad URL, DNS, timeout, connection, ...).
    #[error("curl: {0}")]
    Curl(#[from] curl::Error),
    /// Server answered with a 5xx status.
    #[error("server error: HTTP {0}")]
    ServerStatus(u32),
}
