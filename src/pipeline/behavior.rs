// Copyright 2025 Cowboy AI, LLC.

//! Behaviors wrapping a request handler

use super::request::{Request, RequestHandler};
use crate::shared_kernel::Outcome;
use async_trait::async_trait;
use std::sync::Arc;

/// A step run around the rest of the pipeline
///
/// A behavior either returns an [`Outcome`] of its own, short-circuiting
/// everything inside it, or calls [`Next::run`] and returns what that
/// produced.
#[async_trait]
pub trait PipelineBehavior<R: Request>: Send + Sync {
    /// Run this step
    async fn handle(&self, request: &R, next: Next<'_, R>) -> Outcome<R::Response>;
}

/// Continuation to the inner behaviors and the handler
///
/// `run` consumes the continuation, so the inner pipeline executes at most
/// once per behavior invocation.
pub struct Next<'a, R: Request> {
    behaviors: &'a [Arc<dyn PipelineBehavior<R>>],
    handler: &'a dyn RequestHandler<R>,
}

impl<'a, R: Request> Next<'a, R> {
    pub(crate) fn new(
        behaviors: &'a [Arc<dyn PipelineBehavior<R>>],
        handler: &'a dyn RequestHandler<R>,
    ) -> Self {
        Self { behaviors, handler }
    }

    /// Number of behaviors still to run before the handler
    pub fn remaining(&self) -> usize {
        self.behaviors.len()
    }

    /// Run the rest of the pipeline
    pub async fn run(self, request: &R) -> Outcome<R::Response> {
        match self.behaviors.split_first() {
            Some((behavior, rest)) => {
                let next = Next {
                    behaviors: rest,
                    handler: self.handler,
                };
                behavior.handle(request, next).await
            }
            None => self.handler.handle(request).await,
        }
    }
}
