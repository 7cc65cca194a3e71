//! Core counter types and logic.
//!
//! This module contains the pure functional core of the counter store:
//! - The closed event vocabulary via `CounterEvent` and `ActionKind`
//! - The generic `HistoryStack` and its `HistoryEntry` records
//! - Transition planning via `plan`
//!
//! Nothing in this module performs notifications; the store in
//! [`crate::store`] applies planned steps and runs observers.

mod context;
mod event;
mod history;
mod transition;

pub use context::CounterContext;
pub use event::{ActionKind, CounterEvent, ParseEventError};
pub use history::{HistoryEntry, HistoryStack};
pub use transition::{plan, Step};
