//! The counter store: the "imperative shell" around the pure core.
//!
//! # Key Concepts
//!
//! - **Store**: Owns the `CounterContext`, applies planned steps
//! - **Recorder**: Turns recorded actions into history entries
//! - **Listeners**: Typed, synchronous observers of actions and state
//!
//! Everything here is synchronous. Notifications run on the caller's stack
//! and have finished by the time `send` returns.

mod counter;
mod outcome;
mod recorder;
mod script;

pub use counter::{ActionListener, CounterStore, StateListener, SubscriptionId};
pub use outcome::{ActionRecorded, Outcome, StoreError};
pub use recorder::{DisabledRecorder, HistoryRecorder, Recorder};
pub use script::parse_script;
