//! Retry loop: run an attempt until success or the policy says stop.

use super::error::FetchError;
use super::outcome::FetchOutcome;
use super::policy::{RetryDecision, RetryPolicy};

/// Runs `attempt` until it succeeds, fails permanently, or the policy runs out.
/// Transient failures sleep for the backoff duration, then try again; the last
/// transient error is returned when attempts are exhausted.
pub fn run_with_retry<T, F>(policy: &RetryPolicy, mut attempt: F) -> Result<T, FetchError>
where
    F: FnMut() -> FetchOutcome<T>,
{
    let mut n = 1u32;
    loop {
        match attempt() {
            FetchOutcome::Success(v) => return Ok(v),
            FetchOutcome::PermanentFailure(e) => return Err(e),
            FetchOutcome::TransientFailure(e) => match policy.decide(n) {
                RetryDecision::NoRetry => {
                    tracing::debug!(attempts = n, error = %e, "retries exhausted");
                    return Err(e);
                }
                RetryDecision::RetryAfter(d) => {
                    tracing::warn!(
                        attempt = n,
                        delay_ms = d.as_millis() as u64,
                        error = %e,
                        "transient fetch failure, retrying"
                    );
                    std::thread::sleep(d);
                    n += 1;
                }
            },
        }
    }
}
