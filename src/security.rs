// Copyright 2025 Cowboy AI, LLC.

//! Caller identity as seen by the request pipeline
//!
//! The host authenticates the caller and hands over a [`ClaimsPrincipal`];
//! this module only reads it.

use crate::shared_kernel::{Maybe, MaybeIteratorExt};
use serde::{Deserialize, Serialize};

/// Well-known claim types
pub mod claim_types {
    /// Unique identifier of the subject
    pub const NAME_IDENTIFIER: &str =
        "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/nameidentifier";
    /// Display name of the subject
    pub const NAME: &str = "http://schemas.xmlsoap.org/ws/2005/05/identity/claims/name";
    /// Role granted to the subject
    pub const ROLE: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";
}

/// A typed statement about the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    /// Claim type, compared case-insensitively
    pub claim_type: String,
    /// Claim value
    pub value: String,
}

impl Claim {
    /// Create a claim
    pub fn new(claim_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            claim_type: claim_type.into(),
            value: value.into(),
        }
    }

    fn is_type(&self, claim_type: &str) -> bool {
        self.claim_type.eq_ignore_ascii_case(claim_type)
    }
}

/// The caller's claims plus how they were authenticated
///
/// A principal without an authentication type is anonymous, whatever claims
/// it carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimsPrincipal {
    authentication_type: Option<String>,
    claims: Vec<Claim>,
}

impl ClaimsPrincipal {
    /// Principal authenticated by `authentication_type`
    pub fn authenticated(authentication_type: impl Into<String>, claims: Vec<Claim>) -> Self {
        Self {
            authentication_type: Some(authentication_type.into()),
            claims,
        }
    }

    /// Principal with no authenticated identity
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Whether an identity was established
    pub fn is_authenticated(&self) -> bool {
        self.authentication_type.is_some()
    }

    /// How the identity was established
    pub fn authentication_type(&self) -> Option<&str> {
        self.authentication_type.as_deref()
    }

    /// All claims
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    /// Every claim of the given type
    pub fn find_all<'a>(&'a self, claim_type: &'a str) -> impl Iterator<Item = &'a Claim> + 'a {
        self.claims.iter().filter(move |c| c.is_type(claim_type))
    }

    /// Value of the first claim of the given type
    pub fn find_first(&self, claim_type: &str) -> Maybe<&str> {
        self.claims
            .iter()
            .first_or_none(|c| c.is_type(claim_type))
            .map(|c| c.value.as_str())
    }

    /// The caller's user id, from the name-identifier claim
    pub fn user_id(&self) -> Maybe<&str> {
        self.find_first(claim_types::NAME_IDENTIFIER)
    }
}

/// Accessor for the caller of the request being handled
pub trait CurrentUser: Send + Sync {
    /// The caller's principal, if the host supplied one
    fn principal(&self) -> Maybe<&ClaimsPrincipal>;

    /// The caller's user id
    fn user_id(&self) -> Maybe<String> {
        self.principal()
            .bind(|p| p.user_id().map(str::to_string))
    }

    /// Whether the caller has an authenticated identity
    fn is_authenticated(&self) -> bool {
        self.principal()
            .map(ClaimsPrincipal::is_authenticated)
            .get_value_or(false)
    }
}

/// Current user captured as a plain value for one request
#[derive(Debug, Clone, Default)]
pub struct CurrentUserContext {
    principal: Option<ClaimsPrincipal>,
}

impl CurrentUserContext {
    /// Context for a caller with the given principal
    pub fn new(principal: ClaimsPrincipal) -> Self {
        Self {
            principal: Some(principal),
        }
    }

    /// Context for a request with no principal at all
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Authenticated caller identified only by a user id
    pub fn for_user(user_id: impl Into<String>, authentication_type: impl Into<String>) -> Self {
        Self::new(ClaimsPrincipal::authenticated(
            authentication_type,
            vec![Claim::new(claim_types::NAME_IDENTIFIER, user_id)],
        ))
    }
}

impl CurrentUser for CurrentUserContext {
    fn principal(&self) -> Maybe<&ClaimsPrincipal> {
        Maybe::from_option(self.principal.as_ref())
    }
}
