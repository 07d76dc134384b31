// Copyright (c) 2025 - Cowboy AI, LLC.

//! Domain events
//!
//! Events represent facts that have occurred in the domain. They are immutable.
//! Aggregate operations return them in an [`EventBuffer`]; once the aggregate
//! is persisted the buffer is handed to a [`DomainEventDispatcher`].

use crate::shared_kernel::Outcome;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identity and timestamp stamped on every domain event at creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventMetadata {
    /// Time-ordered event id (UUID v7)
    pub event_id: Uuid,
    /// When the event occurred
    pub occurred_on: DateTime<Utc>,
}

impl EventMetadata {
    /// Stamp a new event with a fresh v7 id and the current time
    pub fn new() -> Self {
        Self {
            event_id: Uuid::now_v7(),
            occurred_on: Utc::now(),
        }
    }
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// Base trait for all domain events
///
/// # Examples
///
/// ```rust
/// use building_blocks::{DomainEvent, EventMetadata};
/// use uuid::Uuid;
///
/// #[derive(Debug)]
/// struct UserCreated {
///     user_id: Uuid,
///     metadata: EventMetadata,
/// }
///
/// impl DomainEvent for UserCreated {
///     fn aggregate_id(&self) -> Uuid {
///         self.user_id
///     }
///
///     fn event_type(&self) -> &'static str {
///         "UserCreated"
///     }
///
///     fn metadata(&self) -> &EventMetadata {
///         &self.metadata
///     }
/// }
///
/// let event = UserCreated { user_id: Uuid::new_v4(), metadata: EventMetadata::new() };
/// assert_eq!(event.event_type(), "UserCreated");
/// assert_eq!(event.event_id().get_version_num(), 7);
/// ```
pub trait DomainEvent: Send + Sync + std::fmt::Debug {
    /// Get the aggregate ID this event relates to
    fn aggregate_id(&self) -> Uuid;

    /// Get the event type name
    fn event_type(&self) -> &'static str;

    /// Identity and timestamp of this event
    fn metadata(&self) -> &EventMetadata;

    /// Unique id of this event
    fn event_id(&self) -> Uuid {
        self.metadata().event_id
    }

    /// When this event occurred
    fn occurred_on(&self) -> DateTime<Utc> {
        self.metadata().occurred_on
    }

    /// Get the schema version
    fn version(&self) -> &'static str {
        "v1"
    }
}

/// Ordered buffer of events produced by aggregate operations
#[derive(Debug, Clone, PartialEq)]
pub struct EventBuffer<E> {
    events: Vec<E>,
}

impl<E> EventBuffer<E> {
    /// Empty buffer
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Buffer holding one event
    pub fn single(event: E) -> Self {
        Self { events: vec![event] }
    }

    /// Append an event
    pub fn record(&mut self, event: E) {
        self.events.push(event);
    }

    /// Append all events from an iterator, keeping their order
    pub fn extend(&mut self, events: impl IntoIterator<Item = E>) {
        self.events.extend(events);
    }

    /// Append every event from another buffer after this buffer's events
    pub fn merge(&mut self, mut other: EventBuffer<E>) {
        self.events.append(&mut other.events);
    }

    /// Number of buffered events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Iterate in record order
    pub fn iter(&self) -> std::slice::Iter<'_, E> {
        self.events.iter()
    }

    /// Take every event out in record order, leaving the buffer empty
    pub fn drain(&mut self) -> Vec<E> {
        std::mem::take(&mut self.events)
    }

    /// Consume the buffer
    pub fn into_vec(self) -> Vec<E> {
        self.events
    }
}

impl<E> Default for EventBuffer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> IntoIterator for EventBuffer<E> {
    type Item = E;
    type IntoIter = std::vec::IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

impl<'a, E> IntoIterator for &'a EventBuffer<E> {
    type Item = &'a E;
    type IntoIter = std::slice::Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter()
    }
}

impl<E> FromIterator<E> for EventBuffer<E> {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            events: iter.into_iter().collect(),
        }
    }
}

/// Delivers buffered events once the producing aggregate has been persisted
#[async_trait]
pub trait DomainEventDispatcher<E: DomainEvent + 'static>: Send + Sync {
    /// Dispatch every event in the buffer, in order
    async fn dispatch(&self, events: EventBuffer<E>) -> Outcome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    struct Shipped {
        order: Uuid,
        seq: u32,
        metadata: EventMetadata,
    }

    impl Shipped {
        fn new(seq: u32) -> Self {
            Self {
                order: Uuid::nil(),
                seq,
                metadata: EventMetadata::new(),
            }
        }
    }

    impl DomainEvent for Shipped {
        fn aggregate_id(&self) -> Uuid {
            self.order
        }

        fn event_type(&self) -> &'static str {
            "Shipped"
        }

        fn metadata(&self) -> &EventMetadata {
            &self.metadata
        }
    }

    #[test]
    fn test_metadata_uses_time_ordered_ids() {
        let first = EventMetadata::new();
        let second = EventMetadata::new();

        assert_eq!(first.event_id.get_version_num(), 7);
        assert_ne!(first.event_id, second.event_id);
        assert!(second.occurred_on >= first.occurred_on);
    }

    #[test]
    fn test_default_version() {
        assert_eq!(Shipped::new(1).version(), "v1");
    }

    /// Drain hands back events in record order and clears the buffer
    ///
    /// ```mermaid
    /// graph LR
    ///     A[record 1,2,3] --> B[drain]
    ///     B -->|returns| C[1,2,3]
    ///     B -->|leaves| D[empty buffer]
    /// ```
    #[test]
    fn test_drain_preserves_order_and_empties() {
        let mut buffer = EventBuffer::new();
        buffer.record(Shipped::new(1));
        buffer.extend([Shipped::new(2), Shipped::new(3)]);

        let drained = buffer.drain();

        assert_eq!(drained.iter().map(|e| e.seq).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert!(buffer.is_empty());
        assert!(buffer.drain().is_empty());
    }

    #[test]
    fn test_merge_appends_after_existing() {
        let mut first: EventBuffer<Shipped> = [Shipped::new(1)].into_iter().collect();
        let second: EventBuffer<Shipped> = [Shipped::new(2), Shipped::new(3)].into_iter().collect();

        first.merge(second);

        let seqs: Vec<u32> = (&first).into_iter().map(|e| e.seq).collect();
        assert_eq!(seqs, vec![1, 2, 3]);
    }

    struct RecordingDispatcher {
        seen: Mutex<Vec<u32>>,
    }

    #[async_trait]
    impl DomainEventDispatcher<Shipped> for RecordingDispatcher {
        async fn dispatch(&self, events: EventBuffer<Shipped>) -> Outcome {
            let mut seen = self.seen.lock().unwrap();
            seen.extend(events.into_iter().map(|e| e.seq));
            Outcome::ok()
        }
    }

    #[tokio::test]
    async fn test_dispatcher_receives_buffer() {
        let dispatcher = RecordingDispatcher {
            seen: Mutex::new(Vec::new()),
        };
        let buffer = EventBuffer::from_iter([Shipped::new(4), Shipped::new(5)]);

        let outcome = dispatcher.dispatch(buffer).await;

        assert!(outcome.is_success());
        assert_eq!(*dispatcher.seen.lock().unwrap(), vec![4, 5]);
    }
}
