//! Builder API for ergonomic counter store construction.
//!
//! Stores can be configured fluently through [`CounterStoreBuilder`] or
//! declaratively from a JSON [`StoreConfig`].

pub mod config;
pub mod error;
pub mod store;

pub use config::StoreConfig;
pub use error::BuildError;
pub use store::CounterStoreBuilder;
