//! Event vocabulary accepted by the counter store.
//!
//! The vocabulary is closed: four events, two of which mutate the count and
//! are therefore recorded in history.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The kind of a mutating action, as stored in history.
///
/// # Example
///
/// ```rust
/// use rewind::core::{ActionKind, CounterEvent};
///
/// assert_eq!(ActionKind::Increment.apply(41), 42);
/// assert_eq!(ActionKind::Decrement.apply(0), -1);
/// assert_eq!(CounterEvent::from(ActionKind::Decrement), CounterEvent::Decrement);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Increment,
    Decrement,
}

impl ActionKind {
    /// Get the action's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
        }
    }

    /// Apply this action to a count.
    ///
    /// The count is unbounded in spirit; at the edges of `i64` it wraps
    /// instead of panicking.
    pub fn apply(&self, count: i64) -> i64 {
        match self {
            Self::Increment => count.wrapping_add(1),
            Self::Decrement => count.wrapping_sub(1),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An event that can be sent to the counter store.
///
/// # Example
///
/// ```rust
/// use rewind::core::{ActionKind, CounterEvent};
///
/// let event: CounterEvent = "Undo".parse().unwrap();
/// assert_eq!(event, CounterEvent::Undo);
/// assert!(!event.is_mutating());
///
/// assert_eq!(CounterEvent::Increment.action(), Some(ActionKind::Increment));
/// assert!("reset".parse::<CounterEvent>().is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CounterEvent {
    Increment,
    Decrement,
    Undo,
    Redo,
}

impl CounterEvent {
    /// Every event in the vocabulary, in declaration order.
    pub const ALL: [CounterEvent; 4] = [
        CounterEvent::Increment,
        CounterEvent::Decrement,
        CounterEvent::Undo,
        CounterEvent::Redo,
    ];

    /// Get the event's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Increment => "increment",
            Self::Decrement => "decrement",
            Self::Undo => "undo",
            Self::Redo => "redo",
        }
    }

    /// The action this event records in history, if it mutates the count
    /// directly.
    pub fn action(&self) -> Option<ActionKind> {
        match self {
            Self::Increment => Some(ActionKind::Increment),
            Self::Decrement => Some(ActionKind::Decrement),
            Self::Undo | Self::Redo => None,
        }
    }

    /// Check if this event is recorded in history when applied.
    ///
    /// Redo is not mutating by itself: it delegates to increment or
    /// decrement, and that delegated step is what gets recorded.
    pub fn is_mutating(&self) -> bool {
        self.action().is_some()
    }
}

impl From<ActionKind> for CounterEvent {
    fn from(kind: ActionKind) -> Self {
        match kind {
            ActionKind::Increment => Self::Increment,
            ActionKind::Decrement => Self::Decrement,
        }
    }
}

impl fmt::Display for CounterEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised when an event name falls outside the vocabulary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseEventError {
    #[error("Unknown event '{0}', expected one of: increment, decrement, undo, redo")]
    Unknown(String),
}

impl FromStr for CounterEvent {
    type Err = ParseEventError;

    /// Parse an event name, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        CounterEvent::ALL
            .into_iter()
            .find(|event| event.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseEventError::Unknown(trimmed.to_string()))
    }
}
