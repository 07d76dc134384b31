// Copyright 2025 Cowboy AI, LLC.

//! Value objects
//!
//! Value objects are immutable, compared by value, and updated by
//! replacement. Equality over every component is what the derived
//! `PartialEq`/`Hash` give, so the trait only states the required bounds.

use crate::entity::EntityId;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Deref;

/// Domain values without identity
///
/// # Properties
/// - Immutable after creation
/// - No identity beyond their attributes
/// - Compared by structural equality
/// - Equal values hash equally
pub trait ValueObject: Clone + PartialEq + Eq + Hash + Debug {}

impl<T> ValueObject for EntityId<T> {}

/// Value object wrapping exactly one value
///
/// # Examples
///
/// ```rust
/// use building_blocks::SingleValue;
///
/// let email = SingleValue::new("ada@example.com".to_string());
/// assert_eq!(email.len(), 15);
/// assert_eq!(email.into_inner(), "ada@example.com");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SingleValue<T>(T);

impl<T> SingleValue<T> {
    /// Wrap a value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Borrow the wrapped value
    pub fn value(&self) -> &T {
        &self.0
    }

    /// Unwrap into the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> Deref for SingleValue<T> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<T> AsRef<T> for SingleValue<T> {
    fn as_ref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for SingleValue<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: Clone + Eq + Hash + Debug> ValueObject for SingleValue<T> {}
