//! Undo/Redo Trace
//!
//! This demo replays the canonical event sequence against a counter store
//! and prints the count after every state change.
//!
//! Key concepts:
//! - Explicitly constructed store, no global state
//! - Subscribers observe every committed state synchronously
//! - Redo replays the action on top of history as a fresh entry
//!
//! Run with: cargo run --example undo_redo_trace
//! Set RUST_LOG=rewind=debug to see the transition log.

use rewind::core::CounterEvent;
use rewind::store::CounterStore;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    println!("=== Undo/Redo Trace ===\n");

    let mut store = CounterStore::builder()
        .subscriber(|context| println!("{}", context.count))
        .build();

    println!("{}", store.count());

    let sequence = [
        CounterEvent::Increment,
        CounterEvent::Decrement,
        CounterEvent::Increment,
        CounterEvent::Increment,
        CounterEvent::Undo,
        CounterEvent::Decrement,
        CounterEvent::Increment,
        CounterEvent::Increment,
        CounterEvent::Redo,
        CounterEvent::Undo,
        CounterEvent::Undo,
    ];

    for event in sequence {
        store.send(event);
    }

    match serde_json::to_string_pretty(store.snapshot()) {
        Ok(json) => println!("\nFinal snapshot:\n{json}"),
        Err(err) => eprintln!("Could not render snapshot: {err}"),
    }

    println!("\n=== Demo Complete ===");
}
