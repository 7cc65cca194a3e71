//! Errors raised while configuring a counter store.

use thiserror::Error;

/// Errors that can occur when loading store configuration.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Invalid store configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),
}
