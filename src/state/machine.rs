//! The stopwatch state machine driver

use serde::Serialize;
use tracing::{debug, info};

use super::{lookup, Action, Clock, Event, Rejected, State, SystemClock, TimerState};

/// An event the machine accepted, with the effect it had
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Accepted {
    pub from: State,
    pub to: State,
    pub action: Action,
    pub message: String,
    pub accumulated_seconds: u64,
    /// Clock reading, in seconds, at which the action ran
    pub at: i64,
}

/// Result of offering one event to the machine
pub type Outcome = Result<Accepted, Rejected>;

/// Read-only view of the machine between events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub state: State,
    pub accumulated_seconds: u64,
}

impl Snapshot {
    pub fn message(&self) -> String {
        format!(
            "Timer is {}. Recorded time: {} seconds",
            self.state, self.accumulated_seconds
        )
    }
}

/// Stopwatch state machine owning its state, timer and clock
#[derive(Debug)]
pub struct StateMachine<C: Clock = SystemClock> {
    state: State,
    timer: TimerState,
    clock: C,
}

impl StateMachine<SystemClock> {
    /// Create a stopped machine reading the wall clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for StateMachine<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> StateMachine<C> {
    /// Create a stopped machine reading `clock`
    pub fn with_clock(clock: C) -> Self {
        Self {
            state: State::Stopped,
            timer: TimerState::new(),
            clock,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn timer(&self) -> &TimerState {
        &self.timer
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            state: self.state,
            accumulated_seconds: self.timer.accumulated(),
        }
    }

    /// Offer `event` to the machine.
    ///
    /// A rejected event leaves state and timer untouched. An accepted one runs
    /// its timing action once and then moves to the next state.
    pub fn handle(&mut self, event: Event) -> Outcome {
        let from = self.state;
        let transition = lookup(from, event).inspect_err(|rejected| {
            debug!("Rejected {} while {}", rejected.event, rejected.state);
        })?;

        let now = self.clock.now();
        let message = self.timer.execute(transition.action, from, now);
        self.state = transition.next;

        debug!(
            "Transition {} --{}--> {} ({:?})",
            from, event, transition.next, transition.action
        );
        if transition.action == Action::AccumulateAndFinalize {
            info!("Stopwatch stopped after {} seconds", self.timer.accumulated());
        }

        Ok(Accepted {
            from,
            to: transition.next,
            action: transition.action,
            message,
            accumulated_seconds: self.timer.accumulated(),
            at: now,
        })
    }
}
