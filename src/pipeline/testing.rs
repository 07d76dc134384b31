// Copyright 2025 Cowboy AI, LLC.

//! Request and handler doubles for behavior tests

use super::request::{LockRequest, Request, RequestHandler, SecuredRequest, SensitiveRequest};
use crate::shared_kernel::Outcome;
use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Debug, Clone)]
pub(crate) struct Transfer {
    pub account: String,
    pub amount: i64,
    pub release_immediately: bool,
}

impl Transfer {
    pub fn new(account: &str, amount: i64) -> Self {
        Self {
            account: account.to_string(),
            amount,
            release_immediately: true,
        }
    }
}

impl Request for Transfer {
    type Response = i64;
}

impl SecuredRequest for Transfer {}
impl SensitiveRequest for Transfer {}

impl LockRequest for Transfer {
    fn lock_key(&self) -> String {
        format!("transfer:{}", self.account)
    }

    fn expiration(&self) -> Duration {
        Duration::from_secs(30)
    }

    fn release_immediately(&self) -> bool {
        self.release_immediately
    }
}

/// Echoes the amount and counts invocations
#[derive(Clone, Default)]
pub(crate) struct CountingHandler {
    pub calls: Arc<AtomicUsize>,
}

impl CountingHandler {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RequestHandler<Transfer> for CountingHandler {
    async fn handle(&self, request: &Transfer) -> Outcome<i64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Outcome::success(request.amount)
    }
}

pub(crate) struct PanickingHandler;

#[async_trait]
impl RequestHandler<Transfer> for PanickingHandler {
    async fn handle(&self, _request: &Transfer) -> Outcome<i64> {
        panic!("ledger unavailable")
    }
}
