//! Counter store that applies planned transitions and runs observers.

use crate::builder::CounterStoreBuilder;
use crate::core::{plan, CounterContext, CounterEvent, Step};
use crate::store::outcome::{ActionRecorded, Outcome, StoreError};
use crate::store::recorder::{HistoryRecorder, Recorder};
use crate::store::script::parse_script;
use chrono::Utc;

/// Callback invoked with the full context after every state change.
pub type StateListener = Box<dyn FnMut(&CounterContext) + Send>;

/// Callback invoked with every recorded action, before the count is
/// committed.
pub type ActionListener = Box<dyn FnMut(&ActionRecorded) + Send>;

/// Handle returned by `subscribe` and `on_action`, used to unsubscribe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Counter store with undo/redo history.
///
/// Every call to [`send`](Self::send) runs to completion before returning:
/// the recorder, action listeners and state subscribers have all been
/// invoked by then. Listeners only receive shared references, so they cannot
/// send events back into the store.
///
/// # Example
///
/// ```rust
/// use rewind::core::CounterEvent;
/// use rewind::store::{CounterStore, Outcome};
///
/// let mut store = CounterStore::new();
///
/// store.send(CounterEvent::Increment);
/// store.send(CounterEvent::Increment);
/// assert_eq!(store.count(), 2);
///
/// assert_eq!(
///     store.send(CounterEvent::Undo),
///     Outcome::Changed { previous: 2, current: 1 }
/// );
/// assert_eq!(store.snapshot().history.size(), 1);
/// ```
pub struct CounterStore {
    context: CounterContext,
    recorder: Box<dyn Recorder>,
    subscribers: Vec<(SubscriptionId, StateListener)>,
    action_listeners: Vec<(SubscriptionId, ActionListener)>,
    next_id: u64,
}

impl Default for CounterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterStore {
    /// Create a store at count 0 that records every action.
    pub fn new() -> Self {
        Self::with_recorder(0, Box::new(HistoryRecorder))
    }

    /// Start building a store with custom configuration.
    pub fn builder() -> CounterStoreBuilder {
        CounterStoreBuilder::new()
    }

    pub(crate) fn with_recorder(initial_count: i64, recorder: Box<dyn Recorder>) -> Self {
        Self {
            context: CounterContext::new(initial_count),
            recorder,
            subscribers: Vec::new(),
            action_listeners: Vec::new(),
            next_id: 0,
        }
    }

    /// Current context (read-only).
    pub fn snapshot(&self) -> &CounterContext {
        &self.context
    }

    /// Current count.
    pub fn count(&self) -> i64 {
        self.context.count
    }

    /// Register a callback run after every state change.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&CounterContext) + Send + 'static,
    {
        let id = self.next_subscription_id();
        self.subscribers.push((id, Box::new(listener)));
        id
    }

    /// Register a callback on the recorded action channel.
    ///
    /// Action listeners run after the recorder, in registration order.
    pub fn on_action<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&ActionRecorded) + Send + 'static,
    {
        let id = self.next_subscription_id();
        self.action_listeners.push((id, Box::new(listener)));
        id
    }

    /// Remove a state subscriber or action listener.
    ///
    /// Returns `false` if the id was not registered (or already removed).
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len() + self.action_listeners.len();
        self.subscribers.retain(|(existing, _)| *existing != id);
        self.action_listeners.retain(|(existing, _)| *existing != id);
        before != self.subscribers.len() + self.action_listeners.len()
    }

    /// Apply one event.
    ///
    /// Undo and redo with an empty history return [`Outcome::Unchanged`]
    /// and notify nobody.
    pub fn send(&mut self, event: CounterEvent) -> Outcome {
        let previous = self.context.count;

        match plan(&self.context, event) {
            Step::Mutate {
                action,
                before,
                after,
            } => {
                self.emit(&ActionRecorded {
                    count: before,
                    event: action,
                    at: Utc::now(),
                });
                self.context.count = after;
            }
            Step::Restore(entry) => {
                self.context.history.pop();
                self.context.count = entry.count;
            }
            Step::Unchanged => {
                tracing::trace!(event = %event, count = previous, "event had nothing to act on");
                return Outcome::Unchanged;
            }
        }

        let current = self.context.count;
        tracing::debug!(
            event = %event,
            previous,
            current,
            depth = self.context.history.size(),
            "applied transition"
        );

        for (_, listener) in self.subscribers.iter_mut() {
            listener(&self.context);
        }

        Outcome::Changed { previous, current }
    }

    /// Parse an event name and apply it.
    ///
    /// Unknown names are rejected before any state is touched.
    pub fn send_named(&mut self, name: &str) -> Result<Outcome, StoreError> {
        let event = name.parse::<CounterEvent>().map_err(|err| {
            tracing::debug!(name, "rejected event");
            StoreError::from(err)
        })?;
        Ok(self.send(event))
    }

    /// Parse a whole event script and apply it in order.
    ///
    /// If any token is invalid, nothing is applied and every invalid token
    /// is reported.
    pub fn run_script(&mut self, script: &str) -> Result<Vec<Outcome>, StoreError> {
        let events = parse_script(script)?;
        Ok(events.into_iter().map(|event| self.send(event)).collect())
    }

    fn emit(&mut self, action: &ActionRecorded) {
        self.recorder.record(action, &mut self.context.history);
        for (_, listener) in self.action_listeners.iter_mut() {
            listener(action);
        }
    }

    fn next_subscription_id(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        id
    }
}
