// Copyright 2025 Cowboy AI, LLC.

//! Rejects secured requests from unauthenticated callers

use super::behavior::{Next, PipelineBehavior};
use super::request::SecuredRequest;
use crate::security::CurrentUser;
use crate::shared_kernel::{Outcome, Rejection};
use async_trait::async_trait;
use std::any::type_name;
use std::sync::Arc;
use tracing::{debug, warn};

/// Lets a [`SecuredRequest`] through only when the caller is authenticated
pub struct AuthorizationBehavior {
    current_user: Arc<dyn CurrentUser>,
}

impl AuthorizationBehavior {
    /// Check callers through `current_user`
    pub fn new(current_user: Arc<dyn CurrentUser>) -> Self {
        Self { current_user }
    }
}

#[async_trait]
impl<R: SecuredRequest> PipelineBehavior<R> for AuthorizationBehavior {
    async fn handle(&self, request: &R, next: Next<'_, R>) -> Outcome<R::Response> {
        if !self.current_user.is_authenticated() {
            warn!(request = type_name::<R>(), "rejecting unauthenticated caller");
            return Outcome::rejected(Rejection::Unauthorized);
        }
        debug!(request = type_name::<R>(), "caller authenticated");
        next.run(request).await
    }
}
