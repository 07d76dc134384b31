// Copyright 2025 Cowboy AI, LLC.

//! Named, time-bounded lock around a request
//!
//! ```mermaid
//! sequenceDiagram
//!     participant B as LockBehavior
//!     participant C as CacheStore
//!     participant N as Next
//!     B->>C: take_lock(key, expiration)
//!     alt not acquired
//!         B-->>B: Forbidden
//!     else acquired
//!         B->>N: run(request)
//!         N-->>B: outcome or panic
//!         opt release_immediately
//!             B->>C: release_lock(key)
//!         end
//!     end
//! ```

use super::behavior::{Next, PipelineBehavior};
use super::request::LockRequest;
use crate::shared_kernel::{Outcome, Rejection};
use crate::stores::CacheStore;
use async_trait::async_trait;
use futures::FutureExt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Holds the request's lock while the rest of the pipeline runs
///
/// A request that cannot take its lock is refused as forbidden and nothing
/// is released. Once the lock is held and the request asks for immediate
/// release, the lock is released exactly once, after the inner pipeline
/// returns or panics; a panic is resumed after the release. A request
/// dropped mid-flight leaves the lock to expire.
pub struct LockBehavior {
    cache: Arc<dyn CacheStore>,
}

impl LockBehavior {
    /// Take locks in `cache`
    pub fn new(cache: Arc<dyn CacheStore>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl<R: LockRequest> PipelineBehavior<R> for LockBehavior {
    async fn handle(&self, request: &R, next: Next<'_, R>) -> Outcome<R::Response> {
        let key = request.lock_key();
        let expiration = request.expiration();

        if !self.cache.take_lock(&key, expiration).await {
            info!(lock_key = %key, "lock held elsewhere, refusing request");
            return Outcome::rejected(Rejection::Forbidden);
        }
        debug!(lock_key = %key, ttl = ?expiration, "lock acquired");

        let result = AssertUnwindSafe(next.run(request)).catch_unwind().await;

        if request.release_immediately() {
            if self.cache.release_lock(&key).await {
                debug!(lock_key = %key, "lock released");
            } else {
                error!(lock_key = %key, "lock was not held at release");
            }
        }

        match result {
            Ok(outcome) => outcome,
            Err(payload) => panic::resume_unwind(payload),
        }
    }
}
