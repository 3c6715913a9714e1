//! States, events and the transition table

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Rejected;

/// Current mode of the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    #[default]
    Stopped,
    Running,
    Paused,
}

impl State {
    pub const ALL: [State; 3] = [State::Stopped, State::Running, State::Paused];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Stopped => "stopped",
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// External stimulus offered to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Event {
    Start,
    Pause,
    Continue,
    Stop,
}

impl Event {
    pub const ALL: [Event; 4] = [Event::Start, Event::Pause, Event::Continue, Event::Stop];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Pause => "pause",
            Self::Continue => "continue",
            Self::Stop => "stop",
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Timing side effect performed by an accepted transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    BeginTiming,
    AccumulateAndSuspend,
    ResumeTiming,
    AccumulateAndFinalize,
    None,
}

/// Target state and action for a legal (state, event) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: State,
    pub action: Action,
}

impl Transition {
    const fn to(next: State, action: Action) -> Self {
        Self { next, action }
    }
}

/// Look up the transition for `event` in `state`.
///
/// Total over every (state, event) pair: each one is either a transition
/// or an explicit rejection.
pub fn lookup(state: State, event: Event) -> Result<Transition, Rejected> {
    let transition = match (state, event) {
        (State::Stopped, Event::Start) => Transition::to(State::Running, Action::BeginTiming),
        (State::Stopped, Event::Stop) => Transition::to(State::Stopped, Action::None),
        (State::Running, Event::Pause) => {
            Transition::to(State::Paused, Action::AccumulateAndSuspend)
        }
        (State::Running, Event::Stop) => {
            Transition::to(State::Stopped, Action::AccumulateAndFinalize)
        }
        (State::Paused, Event::Continue) => Transition::to(State::Running, Action::ResumeTiming),
        (State::Paused, Event::Stop) => {
            Transition::to(State::Stopped, Action::AccumulateAndFinalize)
        }
        (State::Stopped, Event::Pause | Event::Continue)
        | (State::Running, Event::Start | Event::Continue)
        | (State::Paused, Event::Start | Event::Pause) => {
            return Err(Rejected { state, event });
        }
    };

    Ok(transition)
}
