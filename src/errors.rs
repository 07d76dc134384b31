// Copyright 2025 Cowboy AI, LLC.

//! Error types for kernel contract violations
//!
//! Expected failures travel as [`Error`](crate::Error) values inside an
//! [`Outcome`](crate::Outcome). `KernelError` is reserved for misuse of the
//! kernel types themselves: reading an absent value, asking for a single
//! match when there are several, or transitioning an outbox message twice.

use thiserror::Error;

/// Errors raised when a kernel type is used outside its contract
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KernelError {
    /// A `Maybe` was read as if it held a value
    #[error("Expected value of type {type_name} but got None")]
    NoneValue {
        /// Name of the type that was expected
        type_name: &'static str,
    },

    /// More than one element matched where at most one was allowed
    #[error("Sequence contains more than one matching element")]
    MoreThanOneElement,

    /// The outbox message was already marked as processed
    #[error("Outbox message {id} was already processed")]
    AlreadyProcessed {
        /// Id of the outbox message
        id: String,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}

/// Result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

impl From<serde_json::Error> for KernelError {
    fn from(err: serde_json::Error) -> Self {
        KernelError::SerializationError(err.to_string())
    }
}

impl KernelError {
    /// Build a [`KernelError::NoneValue`] naming `T`
    pub fn none_value<T>() -> Self {
        KernelError::NoneValue {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Check if this error came from reading an absent value
    pub fn is_none_value(&self) -> bool {
        matches!(self, KernelError::NoneValue { .. })
    }
}
