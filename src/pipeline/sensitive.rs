// Copyright 2025 Cowboy AI, LLC.

//! Blacklist check for sensitive requests

use super::behavior::{Next, PipelineBehavior};
use super::config::PipelineConfig;
use super::request::SensitiveRequest;
use crate::security::CurrentUser;
use crate::shared_kernel::{Maybe, Outcome, Rejection};
use crate::stores::BlacklistStore;
use async_trait::async_trait;
use std::any::type_name;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Refuses a [`SensitiveRequest`] when the caller's user id is blacklisted
///
/// A request without a user id is rejected as unauthorized before the store
/// is queried. When the store itself fails the request proceeds, unless the
/// behavior is configured to fail closed, in which case the store's error is
/// returned.
pub struct SensitiveRequestBehavior {
    current_user: Arc<dyn CurrentUser>,
    blacklist: Arc<dyn BlacklistStore>,
    rejection: Rejection,
    fail_closed: bool,
}

impl SensitiveRequestBehavior {
    /// Check callers against `blacklist`, rejecting listed ones as forbidden
    pub fn new(current_user: Arc<dyn CurrentUser>, blacklist: Arc<dyn BlacklistStore>) -> Self {
        Self {
            current_user,
            blacklist,
            rejection: Rejection::Forbidden,
            fail_closed: false,
        }
    }

    /// Build from the shared pipeline settings
    pub fn from_config(
        current_user: Arc<dyn CurrentUser>,
        blacklist: Arc<dyn BlacklistStore>,
        config: &PipelineConfig,
    ) -> Self {
        Self::new(current_user, blacklist)
            .with_rejection(config.blacklist_rejection.clone())
            .fail_closed(config.fail_closed_on_blacklist_error)
    }

    /// Rejection returned for blacklisted callers
    pub fn with_rejection(mut self, rejection: Rejection) -> Self {
        self.rejection = rejection;
        self
    }

    /// Whether a failing store rejects the request
    pub fn fail_closed(mut self, fail_closed: bool) -> Self {
        self.fail_closed = fail_closed;
        self
    }
}

#[async_trait]
impl<R: SensitiveRequest> PipelineBehavior<R> for SensitiveRequestBehavior {
    async fn handle(&self, request: &R, next: Next<'_, R>) -> Outcome<R::Response> {
        let user_id = match self.current_user.user_id() {
            Maybe::Some(user_id) => user_id,
            Maybe::None => {
                warn!(request = type_name::<R>(), "sensitive request without a user id");
                return Outcome::rejected(Rejection::Unauthorized);
            }
        };

        match self.blacklist.is_blacklisted(&user_id).await {
            Outcome::Success(false) => {
                debug!(user_id = %user_id, "caller not blacklisted");
                next.run(request).await
            }
            Outcome::Success(true) => {
                info!(
                    user_id = %user_id,
                    request = type_name::<R>(),
                    "blacklisted caller refused"
                );
                Outcome::rejected(self.rejection.clone())
            }
            Outcome::Failure(error) if self.fail_closed => {
                warn!(
                    user_id = %user_id,
                    error = %error,
                    "blacklist unavailable, refusing request"
                );
                Outcome::failure(error)
            }
            Outcome::Failure(error) => {
                warn!(user_id = %user_id, error = %error, "blacklist unavailable, proceeding");
                next.run(request).await
            }
        }
    }
}
