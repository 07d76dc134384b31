// Copyright 2025 Cowboy AI, LLC.

//! Presence/absence algebra
//!
//! [`Maybe`] stands in for nullable references. Reading an absent value is a
//! typed error ([`KernelError::NoneValue`]) rather than a panic.
//!
//! # Monad Laws
//!
//! 1. Left Identity: `some(a).bind(f) ≡ f(a)`
//! 2. Right Identity: `m.bind(some) ≡ m`
//! 3. Associativity: `m.bind(f).bind(g) ≡ m.bind(|x| f(x).bind(g))`

use crate::errors::{KernelError, KernelResult};
use serde::{Deserialize, Serialize};

/// A value that may be absent
///
/// # Examples
///
/// ```rust
/// use building_blocks::Maybe;
///
/// let name = Maybe::some("ada");
/// assert_eq!(name.map(str::len).get_value_or_default(), 3);
///
/// let missing: Maybe<&str> = Maybe::none();
/// assert!(missing.get_value_or_fail().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Option<T>", into = "Option<T>")]
#[serde(bound(serialize = "T: Clone + Serialize", deserialize = "T: Deserialize<'de>"))]
pub enum Maybe<T> {
    /// A value is present
    Some(T),
    /// No value
    None,
}

impl<T> Maybe<T> {
    /// Wrap a present value
    pub fn some(value: T) -> Self {
        Maybe::Some(value)
    }

    /// The absent value
    pub fn none() -> Self {
        Maybe::None
    }

    /// Create from a nullable value
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::Some(value),
            None => Maybe::None,
        }
    }

    /// Whether a value is present
    pub fn has_value(&self) -> bool {
        matches!(self, Maybe::Some(_))
    }

    /// Borrow the value if present
    pub fn try_get_value(&self) -> Option<&T> {
        match self {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }

    /// The value, or `T::default()` when absent
    pub fn get_value_or_default(self) -> T
    where
        T: Default,
    {
        self.get_value_or(T::default())
    }

    /// The value, or `fallback` when absent
    pub fn get_value_or(self, fallback: T) -> T {
        match self {
            Maybe::Some(value) => value,
            Maybe::None => fallback,
        }
    }

    /// The value, or [`KernelError::NoneValue`] when absent
    pub fn get_value_or_fail(self) -> KernelResult<T> {
        match self {
            Maybe::Some(value) => Ok(value),
            Maybe::None => Err(KernelError::none_value::<T>()),
        }
    }

    /// Exhaustively fold both cases
    pub fn match_with<R>(self, none: impl FnOnce() -> R, some: impl FnOnce(T) -> R) -> R {
        match self {
            Maybe::Some(value) => some(value),
            Maybe::None => none(),
        }
    }

    /// Transform the value if present
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        match self {
            Maybe::Some(value) => Maybe::Some(f(value)),
            Maybe::None => Maybe::None,
        }
    }

    /// Chain a computation that may itself produce no value
    pub fn bind<U>(self, f: impl FnOnce(T) -> Maybe<U>) -> Maybe<U> {
        match self {
            Maybe::Some(value) => f(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Bind, then combine the original and bound values
    pub fn bind_map<U, R>(
        self,
        bind: impl FnOnce(&T) -> Maybe<U>,
        combine: impl FnOnce(T, U) -> R,
    ) -> Maybe<R> {
        self.bind(|original| bind(&original).map(|bound| combine(original, bound)))
    }

    /// Keep the value only if it satisfies `predicate`
    pub fn filter(self, predicate: impl FnOnce(&T) -> bool) -> Self {
        match self {
            Maybe::Some(value) if predicate(&value) => Maybe::Some(value),
            _ => Maybe::None,
        }
    }

    /// Borrowing view
    pub fn as_ref(&self) -> Maybe<&T> {
        match self {
            Maybe::Some(value) => Maybe::Some(value),
            Maybe::None => Maybe::None,
        }
    }

    /// Convert into a std `Option`
    pub fn into_option(self) -> Option<T> {
        self.into()
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::None
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        match value {
            Maybe::Some(value) => Some(value),
            Maybe::None => None,
        }
    }
}

/// Lift a std `Option` into [`Maybe`]
pub trait ToMaybe<T> {
    /// Convert into a [`Maybe`]
    fn to_maybe(self) -> Maybe<T>;
}

impl<T> ToMaybe<T> for Option<T> {
    fn to_maybe(self) -> Maybe<T> {
        Maybe::from_option(self)
    }
}

/// Query helpers returning [`Maybe`] instead of `Option`
pub trait MaybeIteratorExt: Iterator + Sized {
    /// First element matching `predicate`
    fn first_or_none(mut self, predicate: impl FnMut(&Self::Item) -> bool) -> Maybe<Self::Item> {
        self.find(predicate).to_maybe()
    }

    /// The only element matching `predicate`
    ///
    /// Fails with [`KernelError::MoreThanOneElement`] when several match.
    fn single_or_none(
        self,
        mut predicate: impl FnMut(&Self::Item) -> bool,
    ) -> KernelResult<Maybe<Self::Item>> {
        let mut matches = self.filter(|item| predicate(item));
        let first = matches.next();
        if matches.next().is_some() {
            return Err(KernelError::MoreThanOneElement);
        }
        Ok(first.to_maybe())
    }
}

impl<I: Iterator> MaybeIteratorExt for I {}
