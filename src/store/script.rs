//! Event scripts: whitespace or comma separated event names.
//!
//! Parsing uses Stillwater's `Validation` to report every rejected token in
//! one pass instead of stopping at the first.

use crate::core::{CounterEvent, ParseEventError};
use crate::store::outcome::StoreError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

fn tokens(script: &str) -> impl Iterator<Item = &str> {
    script
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|token| !token.is_empty())
}

fn parse_token(token: &str) -> Validation<CounterEvent, NonEmptyVec<ParseEventError>> {
    match token.parse::<CounterEvent>() {
        Ok(event) => Validation::success(event),
        Err(err) => Validation::fail(err),
    }
}

/// Parse a script into events, accumulating ALL invalid tokens.
///
/// # Example
///
/// ```rust
/// use rewind::core::CounterEvent;
/// use rewind::store::{parse_script, StoreError};
///
/// let events = parse_script("increment, increment undo\nredo").unwrap();
/// assert_eq!(
///     events,
///     vec![
///         CounterEvent::Increment,
///         CounterEvent::Increment,
///         CounterEvent::Undo,
///         CounterEvent::Redo,
///     ]
/// );
///
/// match parse_script("increment reset jump") {
///     Err(StoreError::InvalidScript { errors }) => assert_eq!(errors.len(), 2),
///     other => panic!("expected InvalidScript, got {other:?}"),
/// }
/// ```
pub fn parse_script(script: &str) -> Result<Vec<CounterEvent>, StoreError> {
    let checks: Vec<_> = tokens(script).map(parse_token).collect();
    if checks.is_empty() {
        return Ok(Vec::new());
    }

    match Validation::all_vec(checks) {
        Validation::Success(events) => Ok(events),
        Validation::Failure(errors) => {
            let errors: Vec<ParseEventError> = errors.iter().cloned().collect();
            tracing::debug!(rejected = errors.len(), "rejected event script");
            Err(StoreError::InvalidScript { errors })
        }
    }
}
