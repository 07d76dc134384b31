// Copyright 2025 Cowboy AI, LLC.

//! Entity types with identity
//!
//! Entities are compared by identity, never by attributes. Aggregate roots are
//! entities that also version their state and report what happened as domain
//! events returned from each operation.

use crate::events::DomainEvent;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use uuid::Uuid;

/// A typed entity ID using phantom types for type safety
///
/// IDs for different entity types cannot be mixed up at compile time. The
/// marker type needs no derives; equality, hashing and serialization only
/// look at the UUID.
///
/// # Examples
///
/// ```rust
/// use building_blocks::EntityId;
///
/// struct User;
/// struct Product;
///
/// let user_id = EntityId::<User>::new();
/// let product_id = EntityId::<Product>::new();
///
/// // These are different types - won't compile if mixed up:
/// // let _: EntityId<User> = product_id;
///
/// let casted: EntityId<Product> = user_id.cast();
/// assert_eq!(casted.as_uuid(), user_id.as_uuid());
/// ```
pub struct EntityId<T> {
    id: Uuid,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> EntityId<T> {
    /// Create a new random entity ID
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// Create an entity ID from a UUID
    pub fn from_uuid(id: Uuid) -> Self {
        Self {
            id,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying UUID
    pub fn as_uuid(&self) -> &Uuid {
        &self.id
    }

    /// Convert to a different entity ID type (use with caution)
    pub fn cast<U>(self) -> EntityId<U> {
        EntityId::from_uuid(self.id)
    }
}

// Manual impls keep the marker type free of derive bounds.
impl<T> Clone for EntityId<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for EntityId<T> {}

impl<T> PartialEq for EntityId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<T> Eq for EntityId<T> {}

impl<T> Hash for EntityId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl<T> fmt::Debug for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("EntityId").field(&self.id).finish()
    }
}

impl<T> fmt::Display for EntityId<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl<T> Default for EntityId<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> From<EntityId<T>> for Uuid {
    fn from(id: EntityId<T>) -> Self {
        id.id
    }
}

impl<T> Serialize for EntityId<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.id.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for EntityId<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Uuid::deserialize(deserializer).map(Self::from_uuid)
    }
}

/// A domain object defined by its identity
pub trait Entity {
    /// The type of ID for this entity
    type Id: Clone + Eq + fmt::Debug + Send + Sync;

    /// Get the entity's ID
    fn id(&self) -> &Self::Id;

    /// Two entities are the same entity iff their ids match
    fn same_identity_as(&self, other: &Self) -> bool {
        self.id() == other.id()
    }
}

/// Entry point for modifying an aggregate
///
/// Operations on an aggregate return the events they produced in an
/// [`EventBuffer`](crate::EventBuffer) instead of stashing them on the
/// aggregate; the caller hands the buffer to a dispatcher after persistence.
///
/// # Examples
///
/// ```rust
/// use building_blocks::{AggregateRoot, DomainEvent, Entity, EntityId, EventBuffer, EventMetadata};
/// use uuid::Uuid;
///
/// struct Order;
///
/// #[derive(Debug)]
/// struct OrderRenamed { order: Uuid, metadata: EventMetadata }
///
/// impl DomainEvent for OrderRenamed {
///     fn aggregate_id(&self) -> Uuid { self.order }
///     fn event_type(&self) -> &'static str { "OrderRenamed" }
///     fn metadata(&self) -> &EventMetadata { &self.metadata }
/// }
///
/// struct OrderAggregate { id: EntityId<Order>, version: u64, name: String }
///
/// impl Entity for OrderAggregate {
///     type Id = EntityId<Order>;
///     fn id(&self) -> &Self::Id { &self.id }
/// }
///
/// impl AggregateRoot for OrderAggregate {
///     type Event = OrderRenamed;
///     fn version(&self) -> u64 { self.version }
///     fn increment_version(&mut self) { self.version += 1; }
/// }
///
/// impl OrderAggregate {
///     fn rename(&mut self, name: &str) -> EventBuffer<OrderRenamed> {
///         self.name = name.to_string();
///         self.increment_version();
///         EventBuffer::single(OrderRenamed {
///             order: *self.id.as_uuid(),
///             metadata: EventMetadata::new(),
///         })
///     }
/// }
///
/// let mut order = OrderAggregate { id: EntityId::new(), version: 0, name: String::new() };
/// let events = order.rename("gift");
/// assert_eq!(events.len(), 1);
/// assert_eq!(order.version(), 1);
/// ```
pub trait AggregateRoot: Entity {
    /// Events produced by this aggregate's operations
    type Event: DomainEvent;

    /// Get the aggregate's version for optimistic concurrency
    fn version(&self) -> u64;

    /// Increment the version
    fn increment_version(&mut self);
}
