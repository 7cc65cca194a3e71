//! History recording policies.
//!
//! The store hands every [`ActionRecorded`] notification to exactly one
//! recorder, which decides what (if anything) lands in the history stack.
//! Swapping the recorder changes undo behavior without touching transition
//! logic.

use crate::core::{HistoryEntry, HistoryStack};
use crate::store::outcome::ActionRecorded;

/// Turns recorded actions into history entries.
///
/// Any `FnMut(&ActionRecorded, &mut HistoryStack<HistoryEntry>) + Send`
/// closure is a recorder.
pub trait Recorder: Send {
    fn record(&mut self, action: &ActionRecorded, history: &mut HistoryStack<HistoryEntry>);
}

impl<F> Recorder for F
where
    F: FnMut(&ActionRecorded, &mut HistoryStack<HistoryEntry>) + Send,
{
    fn record(&mut self, action: &ActionRecorded, history: &mut HistoryStack<HistoryEntry>) {
        self(action, history)
    }
}

/// Default recorder: pushes one entry per recorded action.
#[derive(Clone, Copy, Debug, Default)]
pub struct HistoryRecorder;

impl Recorder for HistoryRecorder {
    fn record(&mut self, action: &ActionRecorded, history: &mut HistoryStack<HistoryEntry>) {
        history.push(HistoryEntry {
            count: action.count,
            event: action.event,
        });
        tracing::trace!(
            count = action.count,
            event = %action.event,
            depth = history.size(),
            "recorded history entry"
        );
    }
}

/// Recorder that keeps no history; undo and redo become no-ops.
#[derive(Clone, Copy, Debug, Default)]
pub struct DisabledRecorder;

impl Recorder for DisabledRecorder {
    fn record(&mut self, _action: &ActionRecorded, _history: &mut HistoryStack<HistoryEntry>) {}
}
