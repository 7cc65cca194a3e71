//! Pure transition planning for the counter store.
//!
//! `plan` inspects a context and an event and describes what should happen,
//! without performing it. The store applies the resulting [`Step`], which is
//! where notifications and history mutation take place.

use super::context::CounterContext;
use super::event::{ActionKind, CounterEvent};
use super::history::HistoryEntry;

/// The planned effect of one event on a context.
///
/// # Example
///
/// ```rust
/// use rewind::core::{plan, ActionKind, CounterContext, CounterEvent, Step};
///
/// let context = CounterContext::new(5);
///
/// assert_eq!(
///     plan(&context, CounterEvent::Decrement),
///     Step::Mutate {
///         action: ActionKind::Decrement,
///         before: 5,
///         after: 4,
///     }
/// );
///
/// // Nothing to undo or redo yet
/// assert_eq!(plan(&context, CounterEvent::Undo), Step::Unchanged);
/// assert_eq!(plan(&context, CounterEvent::Redo), Step::Unchanged);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Apply `action`, moving the count from `before` to `after`.
    /// A mutating step is always recorded.
    Mutate {
        action: ActionKind,
        before: i64,
        after: i64,
    },

    /// Pop the top history entry and restore its count.
    Restore(HistoryEntry),

    /// The event has no effect on this context.
    Unchanged,
}

impl Step {
    /// The count after this step, or `None` if the step changes nothing.
    pub fn target(&self) -> Option<i64> {
        match self {
            Step::Mutate { after, .. } => Some(*after),
            Step::Restore(entry) => Some(entry.count),
            Step::Unchanged => None,
        }
    }
}

fn mutate(context: &CounterContext, action: ActionKind) -> Step {
    Step::Mutate {
        action,
        before: context.count,
        after: action.apply(context.count),
    }
}

/// Plan the transition for `event` from `context`.
///
/// Redo resolves to the action kind of the top history entry and is planned
/// exactly like a fresh increment or decrement, so it is recorded as a new
/// entry. It does not pop the entry it replays.
pub fn plan(context: &CounterContext, event: CounterEvent) -> Step {
    match event {
        CounterEvent::Increment => mutate(context, ActionKind::Increment),
        CounterEvent::Decrement => mutate(context, ActionKind::Decrement),
        CounterEvent::Undo => context
            .last_action()
            .map_or(Step::Unchanged, |entry| Step::Restore(*entry)),
        CounterEvent::Redo => context
            .last_action()
            .map_or(Step::Unchanged, |entry| mutate(context, entry.event)),
    }
}
