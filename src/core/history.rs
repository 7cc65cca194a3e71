//! Undo history tracking.
//!
//! Provides a generic last-in-first-out stack and the entry type the counter
//! store records into it.

use super::event::ActionKind;
use serde::{Deserialize, Serialize};

/// Record of a single mutating action.
///
/// Entries are immutable values pairing the count *before* an action with
/// the action that was applied. Undoing an entry restores `count`.
///
/// # Example
///
/// ```rust
/// use rewind::core::{ActionKind, HistoryEntry};
///
/// let entry = HistoryEntry {
///     count: 4,
///     event: ActionKind::Increment,
/// };
/// assert_eq!(entry.event.apply(entry.count), 5);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The count before the action was applied
    pub count: i64,
    /// The action that was applied
    pub event: ActionKind,
}

/// Last-in-first-out stack of past actions.
///
/// The stack has no domain knowledge and no capacity limit. Operations on an
/// empty stack are well defined: `pop` and `peek` return `None`.
///
/// # Example
///
/// ```rust
/// use rewind::core::HistoryStack;
///
/// let mut stack = HistoryStack::new();
/// stack.push(1);
/// stack.push(2);
///
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.size(), 2);
///
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// assert_eq!(stack.peek(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryStack<T> {
    items: Vec<T>,
}

impl<T> Default for HistoryStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> HistoryStack<T> {
    /// Create a new empty stack.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Push an item on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Remove and return the most recently pushed item.
    ///
    /// Returns `None` and leaves the stack untouched when it is empty.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Return the most recently pushed item without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Number of items currently retained.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Drop every retained item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterate over retained items from oldest to newest.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rewind::core::HistoryStack;
    ///
    /// let stack: HistoryStack<char> = "abc".chars().collect();
    /// let items: Vec<_> = stack.iter().copied().collect();
    /// assert_eq!(items, vec!['a', 'b', 'c']);
    /// ```
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }
}

impl<T> FromIterator<T> for HistoryStack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_stack_is_empty() {
        let stack: HistoryStack<HistoryEntry> = HistoryStack::new();
        assert_eq!(stack.size(), 0);
        assert!(stack.is_empty());
        assert!(stack.peek().is_none());
    }

    #[test]
    fn pop_on_empty_stack_is_none() {
        let mut stack: HistoryStack<u8> = HistoryStack::default();
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.size(), 0);
    }

    #[test]
    fn push_then_pop_is_lifo() {
        let mut stack = HistoryStack::new();
        stack.push(HistoryEntry {
            count: 0,
            event: ActionKind::Increment,
        });
        stack.push(HistoryEntry {
            count: 1,
            event: ActionKind::Decrement,
        });

        assert_eq!(stack.size(), 2);
        assert_eq!(
            stack.pop(),
            Some(HistoryEntry {
                count: 1,
                event: ActionKind::Decrement,
            })
        );
        assert_eq!(
            stack.pop(),
            Some(HistoryEntry {
                count: 0,
                event: ActionKind::Increment,
            })
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn peek_does_not_remove() {
        let mut stack = HistoryStack::new();
        stack.push(7);

        assert_eq!(stack.peek(), Some(&7));
        assert_eq!(stack.peek(), Some(&7));
        assert_eq!(stack.size(), 1);
    }

    #[test]
    fn pop_after_drain_restores_empty_state() {
        let mut stack: HistoryStack<u32> = (0..3).collect();
        while stack.pop().is_some() {}

        assert_eq!(stack, HistoryStack::new());
    }

    #[test]
    fn clear_drops_everything() {
        let mut stack: HistoryStack<u32> = (0..5).collect();
        stack.clear();
        assert!(stack.is_empty());
    }

    #[test]
    fn iter_runs_oldest_to_newest() {
        let stack: HistoryStack<u32> = vec![3, 1, 2].into_iter().collect();
        let forward: Vec<_> = stack.iter().copied().collect();
        let backward: Vec<_> = stack.iter().rev().copied().collect();

        assert_eq!(forward, vec![3, 1, 2]);
        assert_eq!(backward, vec![2, 1, 3]);
    }

    #[test]
    fn history_serializes_as_a_plain_list() {
        let mut stack = HistoryStack::new();
        stack.push(HistoryEntry {
            count: 2,
            event: ActionKind::Increment,
        });

        let json = serde_json::to_string(&stack).unwrap();
        assert_eq!(json, r#"[{"count":2,"event":"increment"}]"#);

        let deserialized: HistoryStack<HistoryEntry> = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, stack);
    }
}
