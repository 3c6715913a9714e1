//! Stopwatch state machine module
//!
//! This module contains the transition table, the timer state it mutates
//! and the driver that ties them to a clock.

pub mod clock;
pub mod error;
pub mod machine;
pub mod shared;
pub mod timer_state;
pub mod transition;

// Re-export main types
pub use clock::{Clock, ManualClock, SystemClock};
pub use error::{Rejected, StopwatchError};
pub use machine::{Accepted, Outcome, Snapshot, StateMachine};
pub use shared::{LastAction, SharedStopwatch};
pub use timer_state::TimerState;
pub use transition::{lookup, Action, Event, State, Transition};
