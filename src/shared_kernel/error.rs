// Copyright 2025 Cowboy AI, LLC.

//! Error values carried by failed outcomes
//!
//! An [`Error`] is not an exception: it is an immutable `(code, message, status)`
//! triple. The canonical values used by the request pipeline are associated
//! constants, and [`Rejection`] is the closed set of ways a pipeline behavior
//! can refuse a request.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Immutable error triple: stable code, human readable message and a numeric
/// status classification (0 when the error has none)
///
/// # Examples
///
/// ```rust
/// use building_blocks::Error;
///
/// let err = Error::with_status("Order.Closed", "Order is already closed", 409);
/// assert_eq!(err.code(), "Order.Closed");
/// assert_eq!(err.status(), 409);
///
/// // A bare message converts into an error with no code
/// let err: Error = "something went wrong".into();
/// assert_eq!(err.code(), "");
/// assert_eq!(err.message(), "something went wrong");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Error {
    code: Cow<'static, str>,
    message: Cow<'static, str>,
    #[serde(default)]
    status: u16,
}

impl Error {
    /// The "no error" sentinel
    pub const NONE: Error = Error::from_static("", "", 0);

    /// Caller is not authenticated
    pub const UNAUTHORIZED: Error = Error::from_static("Error.Unauthorized", "Unauthorized", 401);

    /// Request was malformed or failed validation
    pub const BAD_REQUEST: Error = Error::from_static("Error.BadRequest", "Bad Request", 400);

    /// Requested resource does not exist
    pub const NOT_FOUND: Error = Error::from_static("Error.NotFound", "Not Found", 404);

    /// Caller is authenticated but not allowed to proceed
    pub const FORBIDDEN: Error = Error::from_static("Error.Forbidden", "Forbidden", 403);

    const fn from_static(code: &'static str, message: &'static str, status: u16) -> Self {
        Self {
            code: Cow::Borrowed(code),
            message: Cow::Borrowed(message),
            status,
        }
    }

    /// Create an error with no status classification
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::with_status(code, message, 0)
    }

    /// Create an error with a status classification
    pub fn with_status(code: impl Into<String>, message: impl Into<String>, status: u16) -> Self {
        Self {
            code: Cow::Owned(code.into()),
            message: Cow::Owned(message.into()),
            status,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human readable message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Status classification preserved for transport translation
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Check if this is the [`Error::NONE`] sentinel
    pub fn is_none(&self) -> bool {
        self.code.is_empty() && self.message.is_empty()
    }

    /// Copy of this error carrying a different message
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            code: self.code.clone(),
            message: Cow::Owned(message.into()),
            status: self.status,
        }
    }
}

impl Default for Error {
    fn default() -> Self {
        Error::NONE
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.code.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for Error {}

impl From<&str> for Error {
    fn from(message: &str) -> Self {
        Error::new(String::new(), message)
    }
}

impl From<String> for Error {
    fn from(message: String) -> Self {
        Error::new(String::new(), message)
    }
}

/// Closed set of terminal pipeline rejections
///
/// Behaviors never pick a response wrapper by type; they reject with one of
/// these variants and convert explicitly with [`Rejection::into_error`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", content = "message")]
pub enum Rejection {
    /// Caller has no authenticated identity
    Unauthorized,
    /// Caller is known but denied
    Forbidden,
    /// Request is invalid; carries the reason
    BadRequest(String),
    /// Target does not exist
    NotFound,
}

impl Rejection {
    /// Status code of the rejection
    pub fn status(&self) -> u16 {
        match self {
            Rejection::Unauthorized => 401,
            Rejection::Forbidden => 403,
            Rejection::BadRequest(_) => 400,
            Rejection::NotFound => 404,
        }
    }

    /// Convert into the canonical error value
    pub fn into_error(self) -> Error {
        match self {
            Rejection::Unauthorized => Error::UNAUTHORIZED,
            Rejection::Forbidden => Error::FORBIDDEN,
            Rejection::BadRequest(message) => Error::BAD_REQUEST.with_message(message),
            Rejection::NotFound => Error::NOT_FOUND,
        }
    }
}

impl From<Rejection> for Error {
    fn from(rejection: Rejection) -> Self {
        rejection.into_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(Error::UNAUTHORIZED, "Error.Unauthorized", "Unauthorized", 401 ; "unauthorized")]
    #[test_case(Error::BAD_REQUEST, "Error.BadRequest", "Bad Request", 400 ; "bad request")]
    #[test_case(Error::NOT_FOUND, "Error.NotFound", "Not Found", 404 ; "not found")]
    #[test_case(Error::FORBIDDEN, "Error.Forbidden", "Forbidden", 403 ; "forbidden")]
    #[test_case(Error::NONE, "", "", 0 ; "none")]
    fn test_canonical_errors(err: Error, code: &str, message: &str, status: u16) {
        assert_eq!(err.code(), code);
        assert_eq!(err.message(), message);
        assert_eq!(err.status(), status);
    }

    #[test_case(Rejection::Unauthorized, Error::UNAUTHORIZED ; "unauthorized")]
    #[test_case(Rejection::Forbidden, Error::FORBIDDEN ; "forbidden")]
    #[test_case(Rejection::NotFound, Error::NOT_FOUND ; "not found")]
    fn test_rejection_maps_to_canonical_error(rejection: Rejection, expected: Error) {
        assert_eq!(rejection.status(), expected.status());
        assert_eq!(rejection.into_error(), expected);
    }

    #[test]
    fn test_bad_request_rejection_keeps_message() {
        let err: Error = Rejection::BadRequest("Name is required".to_string()).into();

        assert_eq!(err.code(), "Error.BadRequest");
        assert_eq!(err.message(), "Name is required");
        assert_eq!(err.status(), 400);
    }

    #[test]
    fn test_only_sentinel_is_none() {
        assert!(Error::NONE.is_none());
        assert!(Error::default().is_none());
        assert!(!Error::FORBIDDEN.is_none());
        assert!(!Error::from("message only").is_none());
    }

    #[test]
    fn test_owned_and_static_errors_compare_by_value() {
        let owned = Error::with_status("Error.Forbidden", "Forbidden", 403);
        assert_eq!(owned, Error::FORBIDDEN);
    }

    #[test]
    fn test_display() {
        assert_eq!(Error::NOT_FOUND.to_string(), "Error.NotFound: Not Found");
        assert_eq!(Error::from("plain").to_string(), "plain");
    }

    /// Status must survive a trip through the wire format
    #[test]
    fn test_serde_preserves_status() {
        let json = serde_json::to_string(&Error::FORBIDDEN).unwrap();
        let back: Error = serde_json::from_str(&json).unwrap();
        assert_eq!(back.status(), 403);
        assert_eq!(back, Error::FORBIDDEN);
    }

    #[test]
    fn test_missing_status_defaults_to_zero() {
        let err: Error = serde_json::from_str(r#"{"code":"X","message":"y"}"#).unwrap();
        assert_eq!(err.status(), 0);
    }
}
