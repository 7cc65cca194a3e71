//! Rewind: a counter store with undo/redo history
//!
//! Rewind follows a "pure core, imperative shell" layout. The core plans
//! transitions as pure functions over a [`CounterContext`]; the store applies
//! them, emits a typed notification for every mutating action, and lets a
//! recorder turn those notifications into undo history.
//!
//! # Core Concepts
//!
//! - **Events**: `increment`, `decrement`, `undo` and `redo`
//! - **History**: A LIFO stack of pre-action counts paired with their action
//! - **Recorder**: The policy that turns recorded actions into history
//! - **Listeners**: Synchronous, typed observers of actions and state
//!
//! Redo replays the action kind on top of the history stack through the
//! regular increment/decrement path, so it records a fresh entry rather than
//! restoring a forward slot.
//!
//! # Example
//!
//! ```rust
//! use rewind::core::CounterEvent;
//! use rewind::store::CounterStore;
//!
//! let mut store = CounterStore::new();
//!
//! store.send(CounterEvent::Increment);
//! store.send(CounterEvent::Increment);
//! store.send(CounterEvent::Undo);
//! assert_eq!(store.count(), 1);
//!
//! store.send(CounterEvent::Redo);
//! assert_eq!(store.count(), 2);
//! assert_eq!(store.snapshot().history.size(), 2);
//! ```

pub mod builder;
pub mod core;
pub mod store;

// Re-export commonly used types
pub use builder::{BuildError, CounterStoreBuilder, StoreConfig};
pub use crate::core::{ActionKind, CounterContext, CounterEvent, HistoryEntry, HistoryStack};
pub use store::{ActionRecorded, CounterStore, Outcome, StoreError};
