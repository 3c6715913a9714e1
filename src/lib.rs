//! Stopwatch - an interactive command-line stopwatch
//!
//! The core is a small finite-state machine: events (start, pause, continue,
//! stop) are accepted or rejected depending on the current state, and every
//! accepted event runs one timing action against the owned timer state.
//! The console module wraps it in a read/dispatch loop.

pub mod config;
pub mod console;
pub mod state;
pub mod utils;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::Config;
pub use console::{CommandLoop, OutputFormat};
pub use state::{Action, Event, Outcome, SharedStopwatch, State, StateMachine};
pub use utils::signals::shutdown_signal;
