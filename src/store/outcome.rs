//! Results, notifications and errors produced by the counter store.

use crate::core::{ActionKind, ParseEventError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result of sending one event to the store.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The event changed the context, moving the count from `previous`
    /// to `current`
    Changed { previous: i64, current: i64 },

    /// The event had nothing to act on (undo or redo with empty history)
    Unchanged,
}

impl Outcome {
    pub fn is_changed(&self) -> bool {
        matches!(self, Outcome::Changed { .. })
    }

    /// The count after the event, if it changed anything.
    pub fn count(&self) -> Option<i64> {
        match self {
            Outcome::Changed { current, .. } => Some(*current),
            Outcome::Unchanged => None,
        }
    }
}

/// Notification emitted for every mutating step, before the new count is
/// committed.
///
/// `count` is the value prior to the action, which is exactly what an undo
/// of this action must restore.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionRecorded {
    /// The count before the action was applied
    pub count: i64,
    /// The action being applied
    pub event: ActionKind,
    /// When the action was emitted
    pub at: DateTime<Utc>,
}

/// Errors that can occur at the store's input boundary.
///
/// Neither variant is ever raised after a transition has started: input is
/// validated in full before any state is touched.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Invalid event: {0}")]
    InvalidEvent(#[from] ParseEventError),

    #[error("Event script rejected ({} invalid token(s))", .errors.len())]
    InvalidScript { errors: Vec<ParseEventError> },
}
