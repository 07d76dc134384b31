// Copyright 2025 Cowboy AI, LLC.

//! Outbox message envelope
//!
//! An [`OutboxMessage`] records a serialized event next to a transactional
//! write so it can be delivered later. The only mutation it allows is the
//! single transition to processed.

use crate::errors::{KernelError, KernelResult};
use crate::events::DomainEvent;
use crate::shared_kernel::Outcome;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Serialized event awaiting asynchronous delivery
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OutboxMessage {
    id: Uuid,
    #[serde(rename = "type")]
    message_type: String,
    data: String,
    occurred_on: DateTime<Utc>,
    processed_date: Option<DateTime<Utc>>,
}

impl OutboxMessage {
    /// Record a payload of the given type, stamped now
    pub fn new(message_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            message_type: message_type.into(),
            data: data.into(),
            occurred_on: Utc::now(),
            processed_date: None,
        }
    }

    /// Serialize a domain event into a message typed by its event type
    pub fn from_event<E>(event: &E) -> KernelResult<Self>
    where
        E: DomainEvent + Serialize,
    {
        let data = serde_json::to_string(event)?;
        Ok(Self::new(event.event_type(), data))
    }

    /// Message id
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Type name of the payload
    pub fn message_type(&self) -> &str {
        &self.message_type
    }

    /// Serialized payload
    pub fn data(&self) -> &str {
        &self.data
    }

    /// When the message was recorded
    pub fn occurred_on(&self) -> DateTime<Utc> {
        self.occurred_on
    }

    /// When the message was delivered, if it has been
    pub fn processed_date(&self) -> Option<DateTime<Utc>> {
        self.processed_date
    }

    /// Whether the message has been delivered
    pub fn is_processed(&self) -> bool {
        self.processed_date.is_some()
    }

    /// Stamp the message as delivered
    ///
    /// Fails with [`KernelError::AlreadyProcessed`] on a second call; the
    /// first timestamp is kept.
    pub fn mark_as_processed(&mut self) -> KernelResult<DateTime<Utc>> {
        if self.processed_date.is_some() {
            return Err(KernelError::AlreadyProcessed {
                id: self.id.to_string(),
            });
        }
        let now = Utc::now();
        self.processed_date = Some(now);
        Ok(now)
    }

    /// Deserialize the payload back into `T`
    pub fn payload<T: serde::de::DeserializeOwned>(&self) -> KernelResult<T> {
        Ok(serde_json::from_str(&self.data)?)
    }
}

/// Collects outbox messages inside a unit of work and saves them with it
#[async_trait]
pub trait Outbox: Send + Sync {
    /// Stage a message
    async fn add(&self, message: OutboxMessage);

    /// Persist everything staged
    async fn save(&self) -> Outcome;
}
