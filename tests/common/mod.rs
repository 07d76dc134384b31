//! In-memory stores and a sample request shared by the integration tests

#![allow(dead_code)]

use async_trait::async_trait;
use building_blocks::{
    BlacklistStore, CacheStore, Error, KernelResult, LockRequest, Outcome, Request,
    RequestHandler, SecuredRequest, SensitiveRequest, ValidationFailure,
};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Blacklist kept in a set
#[derive(Default)]
pub struct InMemoryBlacklist {
    keys: Mutex<HashSet<String>>,
}

impl InMemoryBlacklist {
    pub fn with_keys(keys: &[&str]) -> Self {
        Self {
            keys: Mutex::new(keys.iter().map(|k| k.to_string()).collect()),
        }
    }

    fn invalid_key() -> Error {
        Error::new("BlackList.InvalidKey", "Key cannot be empty")
    }
}

#[async_trait]
impl BlacklistStore for InMemoryBlacklist {
    async fn is_blacklisted(&self, key: &str) -> Outcome<bool> {
        if key.is_empty() {
            return Outcome::failure(Self::invalid_key());
        }
        Outcome::success(self.keys.lock().unwrap().contains(key))
    }

    async fn add(&self, key: &str) -> Outcome {
        if key.is_empty() {
            return Outcome::failure(Self::invalid_key());
        }
        self.keys.lock().unwrap().insert(key.to_string());
        Outcome::ok()
    }

    async fn remove(&self, key: &str) -> Outcome {
        if key.is_empty() {
            return Outcome::failure(Self::invalid_key());
        }
        self.keys.lock().unwrap().remove(key);
        Outcome::ok()
    }
}

/// Cache with expiring entries and locks, counting lock calls
#[derive(Default)]
pub struct InMemoryCache {
    values: Mutex<HashMap<String, (Value, Option<Instant>)>>,
    locks: Mutex<HashMap<String, Instant>>,
    pub lock_takes: AtomicUsize,
    pub lock_releases: AtomicUsize,
}

impl InMemoryCache {
    pub fn is_locked(&self, key: &str) -> bool {
        self.locks
            .lock()
            .unwrap()
            .get(key)
            .is_some_and(|expiry| *expiry > Instant::now())
    }

    pub fn releases(&self) -> usize {
        self.lock_releases.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CacheStore for InMemoryCache {
    async fn take_lock(&self, key: &str, ttl: Duration) -> bool {
        self.lock_takes.fetch_add(1, Ordering::SeqCst);
        let now = Instant::now();
        let mut locks = self.locks.lock().unwrap();
        match locks.get(key) {
            Some(expiry) if *expiry > now => false,
            _ => {
                locks.insert(key.to_string(), now + ttl);
                true
            }
        }
    }

    async fn release_lock(&self, key: &str) -> bool {
        self.lock_releases.fetch_add(1, Ordering::SeqCst);
        self.locks.lock().unwrap().remove(key).is_some()
    }

    async fn get(&self, key: &str) -> KernelResult<Option<Value>> {
        let values = self.values.lock().unwrap();
        Ok(values.get(key).and_then(|(value, expiry)| match expiry {
            Some(expiry) if *expiry <= Instant::now() => None,
            _ => Some(value.clone()),
        }))
    }

    async fn set(
        &self,
        key: &str,
        value: Value,
        expires_in: Option<Duration>,
    ) -> KernelResult<bool> {
        let expiry = expires_in.map(|ttl| Instant::now() + ttl);
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), (value, expiry));
        Ok(true)
    }

    async fn remove(&self, key: &str) -> bool {
        self.values.lock().unwrap().remove(key).is_some()
    }
}

/// Renames a customer; secured, sensitive and locked per customer
#[derive(Debug, Clone)]
pub struct RenameCustomer {
    pub customer_id: String,
    pub name: String,
}

impl RenameCustomer {
    pub fn new(customer_id: &str, name: &str) -> Self {
        Self {
            customer_id: customer_id.to_string(),
            name: name.to_string(),
        }
    }
}

impl Request for RenameCustomer {
    type Response = String;
}

impl SecuredRequest for RenameCustomer {}
impl SensitiveRequest for RenameCustomer {}

impl LockRequest for RenameCustomer {
    fn lock_key(&self) -> String {
        format!("customer:{}", self.customer_id)
    }

    fn expiration(&self) -> Duration {
        Duration::from_secs(60)
    }

    fn release_immediately(&self) -> bool {
        true
    }
}

pub fn name_required(request: &RenameCustomer) -> Vec<ValidationFailure> {
    if request.name.trim().is_empty() {
        vec![ValidationFailure::new("name", "Name is required")]
    } else {
        vec![]
    }
}

/// Returns the new name, or panics when asked to
#[derive(Clone, Default)]
pub struct RenameHandler {
    pub calls: Arc<AtomicUsize>,
    pub panic_on: Option<String>,
}

impl RenameHandler {
    pub fn panicking_on(name: &str) -> Self {
        Self {
            panic_on: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RequestHandler<RenameCustomer> for RenameHandler {
    async fn handle(&self, request: &RenameCustomer) -> Outcome<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.panic_on.as_deref() == Some(request.name.as_str()) {
            panic!("store write failed");
        }
        Outcome::success(request.name.clone())
    }
}
