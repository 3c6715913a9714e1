//! Timer state structure and the timing actions that mutate it

use tracing::warn;

use super::{Action, State};

/// Timing data owned by a single state machine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TimerState {
    /// When the open running segment began; `None` unless running
    segment_start: Option<i64>,
    /// Seconds across closed segments since the last start
    accumulated: u64,
}

impl TimerState {
    /// Create a fresh timer with nothing recorded
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds recorded across closed segments
    pub fn accumulated(&self) -> u64 {
        self.accumulated
    }

    /// Start of the open segment, if one is open
    pub fn segment_start(&self) -> Option<i64> {
        self.segment_start
    }

    /// Perform `action` at time `now`, leaving state `from`, and render its message
    pub(crate) fn execute(&mut self, action: Action, from: State, now: i64) -> String {
        match action {
            Action::BeginTiming => {
                self.segment_start = Some(now);
                self.accumulated = 0;
                "Timer started.".to_string()
            }
            Action::AccumulateAndSuspend => {
                self.close_segment(now);
                format!("Timer paused. Elapsed time: {} seconds", self.accumulated)
            }
            Action::ResumeTiming => {
                self.segment_start = Some(now);
                "Timer continued.".to_string()
            }
            Action::AccumulateAndFinalize => {
                // Leaving Paused: the total was already settled on pause
                if from == State::Running {
                    self.close_segment(now);
                }
                format!("Timer stopped. Total time: {} seconds.", self.accumulated)
            }
            Action::None => "No action to perform.".to_string(),
        }
    }

    /// Fold the open segment into `accumulated`
    fn close_segment(&mut self, now: i64) {
        let Some(start) = self.segment_start.take() else {
            warn!("Closing a segment that was never opened");
            return;
        };

        match now.checked_sub(start) {
            Some(delta) if delta >= 0 => {
                self.accumulated = self.accumulated.saturating_add(delta as u64);
            }
            Some(delta) => {
                warn!(
                    "Clock went backwards by {} seconds; counting segment as zero",
                    delta.unsigned_abs()
                );
            }
            None => {
                warn!(
                    "Clock jumped out of range ({} -> {}); counting segment as zero",
                    start, now
                );
            }
        }
    }
}
