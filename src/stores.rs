// Copyright 2025 Cowboy AI, LLC.

//! Key-lookup stores consumed by the request pipeline
//!
//! Implementations live in the host (Redis, an in-process map, ...). The
//! pipeline only needs blacklist membership and a named, time-bounded lock.

use crate::errors::KernelResult;
use crate::shared_kernel::Outcome;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

/// Set of denied identifiers consulted before sensitive operations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BlacklistStore: Send + Sync {
    /// `Success(true)` when `key` is listed, `Success(false)` when it is
    /// not, `Failure` when the store could not answer
    async fn is_blacklisted(&self, key: &str) -> Outcome<bool>;

    /// Deny `key`
    async fn add(&self, key: &str) -> Outcome;

    /// Stop denying `key`
    async fn remove(&self, key: &str) -> Outcome;
}

/// Cache holding JSON values and named locks
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Try to take the lock `key` for at most `ttl`
    ///
    /// Returns `false` without waiting when someone else holds it.
    async fn take_lock(&self, key: &str, ttl: Duration) -> bool;

    /// Release the lock `key`; `false` when it was not held
    async fn release_lock(&self, key: &str) -> bool;

    /// Raw cached value
    async fn get(&self, key: &str) -> KernelResult<Option<Value>>;

    /// Store a raw value, optionally expiring
    async fn set(
        &self,
        key: &str,
        value: Value,
        expires_in: Option<Duration>,
    ) -> KernelResult<bool>;

    /// Drop a cached value; `false` when nothing was cached
    async fn remove(&self, key: &str) -> bool;
}

/// Typed access on top of any [`CacheStore`]
#[async_trait]
pub trait CacheStoreExt: CacheStore {
    /// Cached value deserialized as `T`
    async fn get_as<T>(&self, key: &str) -> KernelResult<Option<T>>
    where
        T: DeserializeOwned + Send,
    {
        match self.get(key).await? {
            Some(value) => Ok(Some(serde_json::from_value(value)?)),
            None => Ok(None),
        }
    }

    /// Serialize and store `value`
    async fn set_as<T>(
        &self,
        key: &str,
        value: &T,
        expires_in: Option<Duration>,
    ) -> KernelResult<bool>
    where
        T: Serialize + Sync,
    {
        let value = serde_json::to_value(value)?;
        self.set(key, value, expires_in).await
    }

    /// Cached value, or the factory's value after caching it
    async fn get_or_add<T, F, Fut>(
        &self,
        key: &str,
        factory: F,
        expires_in: Option<Duration>,
    ) -> KernelResult<T>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        F: FnOnce() -> Fut + Send,
        Fut: Future<Output = T> + Send,
    {
        if let Some(cached) = self.get_as::<T>(key).await? {
            debug!(cache_key = key, "cache hit");
            return Ok(cached);
        }
        debug!(cache_key = key, "cache miss, running factory");
        let value = factory().await;
        self.set_as(key, &value, expires_in).await?;
        Ok(value)
    }
}

impl<S: CacheStore + ?Sized> CacheStoreExt for S {}
