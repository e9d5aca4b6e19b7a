//! Outcome of one fetch attempt.

use super::classify::{classify, FailureClass};
use super::error::FetchError;

/// Closed set of results a single attempt can have.
#[derive(Debug)]
pub enum FetchOutcome<T> {
    Success(T),
    TransientFailure(FetchError),
    PermanentFailure(FetchError),
}

impl<T> From<Result<T, FetchError>> for FetchOutcome<T> {
    fn from(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(v) => FetchOutcome::Success(v),
            Err(e) => match classify(&e) {
                FailureClass::Transient => FetchOutcome::TransientFailure(e),
                FailureClass::Permanent => FetchOutcome::PermanentFailure(e),
            },
        }
    }
}
