//! Retry and backoff policy for profile fetches.
//!
//! Each attempt is classified into a closed set of outcomes
//! (success, transient failure, permanent failure) so the retry loop's
//! decision is an explicit match. Only transient failures are retried.

mod classify;
mod error;
mod outcome;
mod policy;
mod run;

pub use classify::{classify, classify_curl_error, classify_http_status, FailureClass};
pub use error::FetchError;
pub use outcome::FetchOutcome;
pub use policy::{RetryDecision, RetryPolicy};
pub use run::run_with_retry;
