// Copyright 2025 Cowboy AI, LLC.

//! Shared kernel: error values and the Outcome/Maybe algebra

pub mod error;
pub mod maybe;
pub mod outcome;

pub use error::{Error, Rejection};
pub use maybe::{Maybe, MaybeIteratorExt, ToMaybe};
pub use outcome::Outcome;
