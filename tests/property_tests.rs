//! Property-based tests for the counter store.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated event sequences.

use proptest::prelude::*;
use rewind::core::{ActionKind, CounterEvent, HistoryStack};
use rewind::store::{CounterStore, Outcome};

prop_compose! {
    fn arbitrary_action()(increment in any::<bool>()) -> ActionKind {
        if increment {
            ActionKind::Increment
        } else {
            ActionKind::Decrement
        }
    }
}

prop_compose! {
    fn arbitrary_event()(variant in 0..4u8) -> CounterEvent {
        match variant {
            0 => CounterEvent::Increment,
            1 => CounterEvent::Decrement,
            2 => CounterEvent::Undo,
            _ => CounterEvent::Redo,
        }
    }
}

fn delta(action: ActionKind) -> i64 {
    match action {
        ActionKind::Increment => 1,
        ActionKind::Decrement => -1,
    }
}

proptest! {
    #[test]
    fn count_is_sum_of_actions(
        actions in prop::collection::vec(arbitrary_action(), 0..64)
    ) {
        let mut store = CounterStore::new();
        for action in &actions {
            store.send(CounterEvent::from(*action));
        }

        let expected: i64 = actions.iter().map(|a| delta(*a)).sum();
        prop_assert_eq!(store.count(), expected);
        prop_assert_eq!(store.snapshot().history.size(), actions.len());
    }

    #[test]
    fn undo_restores_count_before_action(
        prefix in prop::collection::vec(arbitrary_action(), 0..16),
        action in arbitrary_action()
    ) {
        let mut store = CounterStore::new();
        for a in &prefix {
            store.send(CounterEvent::from(*a));
        }
        let before = store.count();

        store.send(CounterEvent::from(action));
        store.send(CounterEvent::Undo);

        prop_assert_eq!(store.count(), before);
    }

    #[test]
    fn repeated_undo_unwinds_to_zero(
        actions in prop::collection::vec(arbitrary_action(), 0..32)
    ) {
        let mut store = CounterStore::new();
        for action in &actions {
            store.send(CounterEvent::from(*action));
        }

        for _ in 0..actions.len() {
            prop_assert!(store.send(CounterEvent::Undo).is_changed());
        }

        prop_assert_eq!(store.count(), 0);
        prop_assert!(store.snapshot().history.is_empty());
        prop_assert_eq!(store.send(CounterEvent::Undo), Outcome::Unchanged);
    }

    #[test]
    fn redo_after_undo_restores_count(
        actions in prop::collection::vec(arbitrary_action(), 1..32)
    ) {
        let mut store = CounterStore::new();
        for action in &actions {
            store.send(CounterEvent::from(*action));
        }
        let before_undo = store.count();
        let depth = store.snapshot().history.size();

        store.send(CounterEvent::Undo);
        store.send(CounterEvent::Redo);

        // Redo can only replay when something remains under the undone entry
        if depth > 1 {
            let replayed = store.snapshot().history.peek().map(|entry| entry.event);
            prop_assert_eq!(replayed, actions.get(depth - 2).copied());
            prop_assert_eq!(store.snapshot().history.size(), depth);
        } else {
            prop_assert_eq!(store.count(), 0);
        }

        // Redo reapplies the kind below the undone entry, which matches the
        // undone action whenever the last two actions agree.
        if depth > 1 && actions[depth - 1] == actions[depth - 2] {
            prop_assert_eq!(store.count(), before_undo);
        }
    }

    #[test]
    fn history_size_tracks_mutations(
        events in prop::collection::vec(arbitrary_event(), 0..64)
    ) {
        let mut store = CounterStore::new();

        for event in events {
            let size_before = store.snapshot().history.size();
            let outcome = store.send(event);
            let size_after = store.snapshot().history.size();

            match (event, outcome) {
                (CounterEvent::Increment | CounterEvent::Decrement, _) => {
                    prop_assert_eq!(size_after, size_before + 1);
                }
                (CounterEvent::Redo, Outcome::Changed { .. }) => {
                    prop_assert_eq!(size_after, size_before + 1);
                }
                (CounterEvent::Undo, Outcome::Changed { .. }) => {
                    prop_assert_eq!(size_after, size_before - 1);
                }
                (_, Outcome::Unchanged) => {
                    prop_assert_eq!(size_before, 0);
                    prop_assert_eq!(size_after, 0);
                }
            }
        }
    }

    #[test]
    fn rejected_names_never_change_state(
        actions in prop::collection::vec(arbitrary_action(), 0..16),
        name in "[a-z]{1,12}"
    ) {
        prop_assume!(name.parse::<CounterEvent>().is_err());

        let mut store = CounterStore::new();
        for action in &actions {
            store.send(CounterEvent::from(*action));
        }
        let before = store.snapshot().clone();

        prop_assert!(store.send_named(&name).is_err());
        prop_assert_eq!(store.snapshot(), &before);
    }

    #[test]
    fn stack_pop_returns_pushes_in_reverse(
        items in prop::collection::vec(any::<i32>(), 0..32)
    ) {
        let mut stack = HistoryStack::new();
        for item in &items {
            stack.push(*item);
        }

        let mut popped = Vec::new();
        while let Some(item) = stack.pop() {
            popped.push(item);
        }
        popped.reverse();

        prop_assert_eq!(popped, items);
        prop_assert_eq!(stack.peek(), None);
    }
}
