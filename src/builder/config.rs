//! Declarative store configuration.

use crate::builder::error::BuildError;
use serde::{Deserialize, Serialize};

/// Serializable settings for a counter store.
///
/// Every field is optional in the serialized form.
///
/// # Example
///
/// ```rust
/// use rewind::builder::StoreConfig;
///
/// let config = StoreConfig::from_json(r#"{ "initial_count": 10 }"#).unwrap();
/// assert_eq!(config.initial_count, 10);
/// assert!(config.record_history);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StoreConfig {
    /// Count the store starts at
    pub initial_count: i64,

    /// Whether actions are recorded for undo/redo
    pub record_history: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_count: 0,
            record_history: true,
        }
    }
}

impl StoreConfig {
    /// Parse configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self, BuildError> {
        Ok(serde_json::from_str(json)?)
    }
}
