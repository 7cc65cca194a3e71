//! Builder for constructing counter stores.

use crate::builder::config::StoreConfig;
use crate::core::CounterContext;
use crate::store::{
    ActionListener, ActionRecorded, CounterStore, DisabledRecorder, HistoryRecorder, Recorder,
    StateListener,
};

/// Builder for constructing counter stores with a fluent API.
///
/// # Example
///
/// ```rust
/// use rewind::builder::CounterStoreBuilder;
/// use rewind::core::CounterEvent;
///
/// let mut store = CounterStoreBuilder::new()
///     .initial_count(100)
///     .record_history(false)
///     .build();
///
/// store.send(CounterEvent::Decrement);
/// store.send(CounterEvent::Undo);
/// assert_eq!(store.count(), 99);
/// ```
pub struct CounterStoreBuilder {
    initial_count: i64,
    record_history: bool,
    recorder: Option<Box<dyn Recorder>>,
    subscribers: Vec<StateListener>,
    action_listeners: Vec<ActionListener>,
}

impl CounterStoreBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            initial_count: 0,
            record_history: true,
            recorder: None,
            subscribers: Vec::new(),
            action_listeners: Vec::new(),
        }
    }

    /// Apply every setting from a config.
    pub fn config(self, config: &StoreConfig) -> Self {
        self.initial_count(config.initial_count)
            .record_history(config.record_history)
    }

    /// Set the starting count (default 0).
    pub fn initial_count(mut self, count: i64) -> Self {
        self.initial_count = count;
        self
    }

    /// Enable or disable history recording (default enabled).
    ///
    /// Ignored when a custom recorder is set.
    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    /// Replace the history recording policy.
    pub fn recorder<R>(mut self, recorder: R) -> Self
    where
        R: Recorder + 'static,
    {
        self.recorder = Some(Box::new(recorder));
        self
    }

    /// Add a state subscriber.
    pub fn subscriber<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&CounterContext) + Send + 'static,
    {
        self.subscribers.push(Box::new(listener));
        self
    }

    /// Add a recorded action listener.
    pub fn action_listener<F>(mut self, listener: F) -> Self
    where
        F: FnMut(&ActionRecorded) + Send + 'static,
    {
        self.action_listeners.push(Box::new(listener));
        self
    }

    /// Build the store.
    pub fn build(self) -> CounterStore {
        let recorder = match self.recorder {
            Some(recorder) => recorder,
            None if self.record_history => Box::new(HistoryRecorder),
            None => Box::new(DisabledRecorder),
        };

        let mut store = CounterStore::with_recorder(self.initial_count, recorder);
        for listener in self.subscribers {
            store.subscribe(listener);
        }
        for listener in self.action_listeners {
            store.on_action(listener);
        }

        tracing::debug!(
            initial_count = self.initial_count,
            record_history = self.record_history,
            "built counter store"
        );
        store
    }
}

impl Default for CounterStoreBuilder {
    fn default() -> Self {
        Self::new()
    }
}
