//! Errors raised by the stopwatch core

use thiserror::Error;

use super::{Event, State};

/// An event that has no transition from the current state.
///
/// Nothing was mutated; the caller renders the message and carries on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid input. Cannot {event} while the timer is {state}.")]
pub struct Rejected {
    pub state: State,
    pub event: Event,
}

impl Rejected {
    /// User-facing notice for this rejection
    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// Failures of the shared, lock-guarded stopwatch
#[derive(Debug, Error)]
pub enum StopwatchError {
    #[error("Failed to lock stopwatch: {0}")]
    LockPoisoned(String),
}
