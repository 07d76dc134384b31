// Copyright 2025 Cowboy AI, LLC.

//! Requests, handlers and the markers that opt a request into behaviors

use crate::shared_kernel::Outcome;
use async_trait::async_trait;
use std::time::Duration;

/// A command or query sent through a [`Pipeline`](crate::Pipeline)
///
/// # Examples
///
/// ```rust
/// use building_blocks::{Outcome, Request, RequestHandler};
/// use async_trait::async_trait;
///
/// struct Greet { name: String }
///
/// impl Request for Greet {
///     type Response = String;
/// }
///
/// struct GreetHandler;
///
/// #[async_trait]
/// impl RequestHandler<Greet> for GreetHandler {
///     async fn handle(&self, request: &Greet) -> Outcome<String> {
///         Outcome::success(format!("Hello, {}!", request.name))
///     }
/// }
/// ```
pub trait Request: Send + Sync + 'static {
    /// Value produced on success
    type Response: Send + 'static;
}

/// Terminal step of a pipeline
#[async_trait]
pub trait RequestHandler<R: Request>: Send + Sync {
    /// Handle the request
    async fn handle(&self, request: &R) -> Outcome<R::Response>;
}

/// Request that requires an authenticated caller
pub trait SecuredRequest: Request {}

/// Request that blacklisted callers may not perform
pub trait SensitiveRequest: Request {}

/// Request that must hold a named lock while it runs
pub trait LockRequest: Request {
    /// Name of the lock
    fn lock_key(&self) -> String;

    /// How long the lock may be held before it expires on its own
    fn expiration(&self) -> Duration;

    /// Release the lock as soon as the request finishes instead of waiting
    /// for it to expire
    fn release_immediately(&self) -> bool;
}
