//! Counter state owned by the store.

use super::history::{HistoryEntry, HistoryStack};
use serde::{Deserialize, Serialize};

/// Complete state of a counter store: the current count plus its undo
/// history.
///
/// The history is only ever mutated by the store, through its recorder and
/// its undo transition.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterContext {
    pub count: i64,
    pub history: HistoryStack<HistoryEntry>,
}

impl CounterContext {
    /// Create a context at `count` with an empty history.
    pub fn new(count: i64) -> Self {
        Self {
            count,
            history: HistoryStack::new(),
        }
    }

    /// The entry an undo would pop, if any.
    pub fn last_action(&self) -> Option<&HistoryEntry> {
        self.history.peek()
    }
}
