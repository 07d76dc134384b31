// Copyright 2025 Cowboy AI, LLC.

//! Request pipeline
//!
//! A [`Pipeline`] sends a request through an ordered list of behaviors and
//! finally to its handler. Each behavior may refuse the request with a
//! [`Rejection`](crate::Rejection) or pass it inward.
//!
//! ```mermaid
//! graph LR
//!     S[send] --> V[Validation]
//!     V --> A[Authorization]
//!     A --> B[Sensitive / blacklist]
//!     B --> L[Lock]
//!     L --> H[Handler]
//! ```
//!
//! The standard order matches [`Pipeline::standard`]: requests are validated
//! before the caller is authenticated, the blacklist is consulted before a
//! lock is taken, and only the handler runs while the lock is held.

mod authorization;
mod behavior;
mod config;
mod lock;
mod request;
mod sensitive;
mod validation;

#[cfg(test)]
pub(crate) mod testing;

pub use authorization::AuthorizationBehavior;
pub use behavior::{Next, PipelineBehavior};
pub use config::PipelineConfig;
pub use lock::LockBehavior;
pub use request::{LockRequest, Request, RequestHandler, SecuredRequest, SensitiveRequest};
pub use sensitive::SensitiveRequestBehavior;
pub use validation::{RequestValidationBehavior, ValidationFailure, Validator};

use crate::security::CurrentUser;
use crate::shared_kernel::Outcome;
use crate::stores::{BlacklistStore, CacheStore};
use std::any::type_name;
use std::sync::Arc;
use tracing::debug;

/// A handler wrapped in behaviors
///
/// Behaviors run in the order they were added: the first one added is the
/// outermost. Building a pipeline only clones `Arc`s, so hosts can build one
/// per request around that request's [`CurrentUser`].
pub struct Pipeline<R: Request> {
    behaviors: Vec<Arc<dyn PipelineBehavior<R>>>,
    handler: Arc<dyn RequestHandler<R>>,
}

impl<R: Request> Pipeline<R> {
    /// Pipeline with no behaviors around `handler`
    pub fn new(handler: impl RequestHandler<R> + 'static) -> Self {
        Self::from_shared(Arc::new(handler))
    }

    /// Pipeline around a handler that is shared with other pipelines
    pub fn from_shared(handler: Arc<dyn RequestHandler<R>>) -> Self {
        Self {
            behaviors: Vec::new(),
            handler,
        }
    }

    /// Add a behavior inside the ones already added
    pub fn with_behavior(self, behavior: impl PipelineBehavior<R> + 'static) -> Self {
        self.with_shared_behavior(Arc::new(behavior))
    }

    /// Add a behavior that is shared with other pipelines
    pub fn with_shared_behavior(mut self, behavior: Arc<dyn PipelineBehavior<R>>) -> Self {
        self.behaviors.push(behavior);
        self
    }

    /// Number of behaviors around the handler
    pub fn behavior_count(&self) -> usize {
        self.behaviors.len()
    }

    /// Send `request` through every behavior to the handler
    pub async fn send(&self, request: &R) -> Outcome<R::Response> {
        debug!(
            request = type_name::<R>(),
            behaviors = self.behaviors.len(),
            "sending request"
        );
        Next::new(&self.behaviors, self.handler.as_ref())
            .run(request)
            .await
    }
}

/// Stores and identity the standard behaviors depend on
#[derive(Clone)]
pub struct PipelineServices {
    /// Caller of the request
    pub current_user: Arc<dyn CurrentUser>,
    /// Denied user ids
    pub blacklist: Arc<dyn BlacklistStore>,
    /// Lock provider
    pub cache: Arc<dyn CacheStore>,
}

impl<R> Pipeline<R>
where
    R: SecuredRequest + SensitiveRequest + LockRequest,
{
    /// Pipeline with every standard behavior: validation, authorization,
    /// blacklist check and lock, outermost first
    pub fn standard(
        handler: impl RequestHandler<R> + 'static,
        validators: Vec<Arc<dyn Validator<R>>>,
        services: PipelineServices,
        config: &PipelineConfig,
    ) -> Self {
        Self::new(handler)
            .with_behavior(RequestValidationBehavior::from_config(validators, config))
            .with_behavior(AuthorizationBehavior::new(services.current_user.clone()))
            .with_behavior(SensitiveRequestBehavior::from_config(
                services.current_user,
                services.blacklist,
                config,
            ))
            .with_behavior(LockBehavior::new(services.cache))
    }
}
