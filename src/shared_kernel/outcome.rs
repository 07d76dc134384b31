// Copyright 2025 Cowboy AI, LLC.

//! Success/failure algebra
//!
//! [`Outcome`] is a tagged success/failure value. One generic type covers the
//! three shapes a shared kernel usually needs:
//!
//! - `Outcome`: success or failure with an [`Error`], no value
//! - `Outcome<T>`: a value on success, an [`Error`] on failure
//! - `Outcome<T, E>`: a value on success, any error type on failure
//!
//! A failure is terminal for the pipeline chain it exits. An outcome is never
//! simultaneously a success and carrying an error.

use crate::shared_kernel::error::{Error, Rejection};
use serde::{Deserialize, Serialize};

static NO_ERROR: Error = Error::NONE;

/// Tagged success/failure outcome
///
/// # Examples
///
/// ```rust
/// use building_blocks::{Error, Outcome};
///
/// let ok: Outcome<u32> = Outcome::success(2);
/// let doubled = ok.map(|v| v * 2);
/// assert_eq!(doubled.value(), Some(&4));
///
/// let failed: Outcome<u32> = Error::NOT_FOUND.into();
/// let status = failed.match_with(|_| 200, |e| e.status());
/// assert_eq!(status, 404);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", content = "content")]
#[must_use = "an Outcome may be a failure that should be handled"]
pub enum Outcome<T = (), E = Error> {
    /// The operation succeeded
    Success(T),
    /// The operation failed
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Successful outcome carrying `value`
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Failed outcome carrying `error`
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Whether this is a success
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Whether this is a failure
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// The success value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure error, if any
    pub fn error(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Exhaustively fold both branches into one value
    pub fn match_with<R>(
        self,
        on_success: impl FnOnce(T) -> R,
        on_failure: impl FnOnce(E) -> R,
    ) -> R {
        match self {
            Outcome::Success(value) => on_success(value),
            Outcome::Failure(error) => on_failure(error),
        }
    }

    /// Transform the success value
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => Outcome::Success(f(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Transform the failure error
    pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> Outcome<T, F> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(f(error)),
        }
    }

    /// Chain a computation that may itself fail
    pub fn bind<U>(self, f: impl FnOnce(T) -> Outcome<U, E>) -> Outcome<U, E> {
        match self {
            Outcome::Success(value) => f(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Borrowing view of the outcome
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Convert into a std `Result` so `?` can be used
    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl Outcome<(), Error> {
    /// Unit success
    pub fn ok() -> Self {
        Outcome::Success(())
    }

    /// Unit failure with no error detail (carries [`Error::NONE`])
    pub fn failed() -> Self {
        Outcome::Failure(Error::NONE)
    }
}

impl<T> Outcome<T, Error> {
    /// Failure built from a pipeline rejection
    pub fn rejected(rejection: Rejection) -> Self {
        Outcome::Failure(rejection.into_error())
    }

    /// The failure error, or the [`Error::NONE`] sentinel on success
    pub fn error_or_none(&self) -> &Error {
        match self {
            Outcome::Success(_) => &NO_ERROR,
            Outcome::Failure(error) => error,
        }
    }

    /// Status classification: 0 on success, the error status otherwise
    pub fn status(&self) -> u16 {
        self.error_or_none().status()
    }
}

impl<T> From<Error> for Outcome<T, Error> {
    fn from(error: Error) -> Self {
        Outcome::Failure(error)
    }
}

impl<T> From<Rejection> for Outcome<T, Error> {
    fn from(rejection: Rejection) -> Self {
        Outcome::rejected(rejection)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        match outcome {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}
