// Copyright 2025 Cowboy AI, LLC.

//! Request validation

use super::behavior::{Next, PipelineBehavior};
use super::config::PipelineConfig;
use super::request::Request;
use crate::shared_kernel::{Outcome, Rejection};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::any::type_name;
use std::sync::Arc;
use tracing::{debug, warn};

/// One reason a request is invalid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Offending field, empty when the failure is about the whole request
    pub field: String,
    /// Human readable reason
    pub message: String,
}

impl ValidationFailure {
    /// Failure on `field`
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Checks a request and reports every failure it finds
///
/// Closures of the right shape are validators:
///
/// ```rust
/// use building_blocks::{ValidationFailure, Validator};
///
/// struct Rename { name: String }
///
/// let name_required = |r: &Rename| {
///     if r.name.is_empty() {
///         vec![ValidationFailure::new("name", "Name is required")]
///     } else {
///         vec![]
///     }
/// };
///
/// assert_eq!(name_required.validate(&Rename { name: String::new() }).len(), 1);
/// ```
pub trait Validator<R>: Send + Sync {
    /// All failures, empty when the request is valid
    fn validate(&self, request: &R) -> Vec<ValidationFailure>;
}

impl<R, F> Validator<R> for F
where
    F: Fn(&R) -> Vec<ValidationFailure> + Send + Sync,
{
    fn validate(&self, request: &R) -> Vec<ValidationFailure> {
        self(request)
    }
}

/// Runs every validator and rejects the request if any of them fails
///
/// Messages are joined in validator order, then in the order each validator
/// reported them. With no validators every request passes.
pub struct RequestValidationBehavior<R> {
    validators: Vec<Arc<dyn Validator<R>>>,
    separator: String,
}

impl<R> RequestValidationBehavior<R> {
    /// Validate with `validators`, joining messages with a newline
    pub fn new(validators: Vec<Arc<dyn Validator<R>>>) -> Self {
        Self {
            validators,
            separator: PipelineConfig::default().validation_separator,
        }
    }

    /// Build from the shared pipeline settings
    pub fn from_config(validators: Vec<Arc<dyn Validator<R>>>, config: &PipelineConfig) -> Self {
        Self::new(validators).with_separator(config.validation_separator.clone())
    }

    /// Join messages with `separator`
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    /// Add another validator after the existing ones
    pub fn with_validator(mut self, validator: impl Validator<R> + 'static) -> Self {
        self.validators.push(Arc::new(validator));
        self
    }

    fn failures(&self, request: &R) -> Vec<ValidationFailure> {
        self.validators
            .iter()
            .flat_map(|validator| validator.validate(request))
            .collect()
    }
}

#[async_trait]
impl<R: Request> PipelineBehavior<R> for RequestValidationBehavior<R> {
    async fn handle(&self, request: &R, next: Next<'_, R>) -> Outcome<R::Response> {
        let failures = self.failures(request);
        if failures.is_empty() {
            debug!(request = type_name::<R>(), "request valid");
            return next.run(request).await;
        }

        let message = failures
            .iter()
            .map(|failure| failure.message.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator);
        warn!(
            request = type_name::<R>(),
            failures = failures.len(),
            "request failed validation"
        );
        Outcome::rejected(Rejection::BadRequest(message))
    }
}
