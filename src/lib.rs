// Copyright 2025 Cowboy AI, LLC.

//! # Building Blocks
//!
//! Shared kernel for services built with Domain-Driven Design and a
//! request pipeline.
//!
//! This crate provides:
//! - **Outcome / Maybe**: success/failure and presence/absence algebra with
//!   canonical [`Error`] values
//! - **Entities and aggregates**: identity-based types whose operations
//!   return the [`DomainEvent`]s they raise in an [`EventBuffer`]
//! - **Value objects**: types compared by their components
//! - **Outbox**: the [`OutboxMessage`] envelope for deferred event delivery
//! - **Pipeline**: validation, authorization, blacklist and lock behaviors
//!   wrapped around a [`RequestHandler`]
//!
//! ## Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use building_blocks::{
//!     AuthorizationBehavior, CurrentUserContext, Error, Outcome, Pipeline,
//!     Request, RequestHandler, SecuredRequest,
//! };
//! use std::sync::Arc;
//!
//! struct CloseAccount { account: String }
//!
//! impl Request for CloseAccount {
//!     type Response = ();
//! }
//! impl SecuredRequest for CloseAccount {}
//!
//! struct CloseAccountHandler;
//!
//! #[async_trait]
//! impl RequestHandler<CloseAccount> for CloseAccountHandler {
//!     async fn handle(&self, _request: &CloseAccount) -> Outcome {
//!         Outcome::ok()
//!     }
//! }
//!
//! # futures::executor::block_on(async {
//! let anonymous = Arc::new(CurrentUserContext::anonymous());
//! let pipeline = Pipeline::new(CloseAccountHandler)
//!     .with_behavior(AuthorizationBehavior::new(anonymous));
//!
//! let outcome = pipeline.send(&CloseAccount { account: "acc-1".into() }).await;
//! assert_eq!(outcome, Outcome::failure(Error::UNAUTHORIZED));
//! # });
//! ```

#![warn(missing_docs)]

mod entity;
mod errors;
mod events;
mod outbox;
pub mod pipeline;
pub mod security;
pub mod shared_kernel;
mod stores;
mod value_object;

pub use entity::{AggregateRoot, Entity, EntityId};
pub use errors::{KernelError, KernelResult};
pub use events::{DomainEvent, DomainEventDispatcher, EventBuffer, EventMetadata};
pub use outbox::{Outbox, OutboxMessage};
pub use pipeline::{
    AuthorizationBehavior, LockBehavior, LockRequest, Next, Pipeline, PipelineBehavior,
    PipelineConfig, PipelineServices, Request, RequestHandler, RequestValidationBehavior,
    SecuredRequest, SensitiveRequest, SensitiveRequestBehavior, ValidationFailure, Validator,
};
pub use security::{claim_types, Claim, ClaimsPrincipal, CurrentUser, CurrentUserContext};
pub use shared_kernel::{Error, Maybe, MaybeIteratorExt, Outcome, Rejection, ToMaybe};
pub use stores::{BlacklistStore, CacheStore, CacheStoreExt};
pub use value_object::{SingleValue, ValueObject};
