// Copyright 2025 Cowboy AI, LLC.

//! Pipeline configuration

use crate::errors::{KernelError, KernelResult};
use crate::shared_kernel::Rejection;
use serde::{Deserialize, Serialize};

/// Settings shared by the standard behaviors
///
/// Every field has a default, so a partial JSON document is enough:
///
/// ```rust
/// use building_blocks::{PipelineConfig, Rejection};
///
/// let config = PipelineConfig::from_json(r#"{"fail_closed_on_blacklist_error": true}"#).unwrap();
/// assert!(config.fail_closed_on_blacklist_error);
/// assert_eq!(config.blacklist_rejection, Rejection::Forbidden);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Joins the messages of every validation failure
    pub validation_separator: String,
    /// Returned when the caller is blacklisted
    pub blacklist_rejection: Rejection,
    /// Reject instead of proceeding when the blacklist cannot be queried
    pub fail_closed_on_blacklist_error: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            validation_separator: "\n".to_string(),
            blacklist_rejection: Rejection::Forbidden,
            fail_closed_on_blacklist_error: false,
        }
    }
}

impl PipelineConfig {
    /// Parse from JSON, filling missing fields with defaults
    pub fn from_json(json: &str) -> KernelResult<Self> {
        serde_json::from_str(json)
            .map_err(|e| KernelError::ConfigurationError(format!("invalid pipeline config: {e}")))
    }
}
