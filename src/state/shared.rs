//! Lock-guarded stopwatch for concurrent callers

use chrono::{DateTime, Utc};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::info;

use super::{Clock, Event, Outcome, Snapshot, StateMachine, StopwatchError, SystemClock};

/// Most recent accepted event, timed by the stopwatch's own clock
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LastAction {
    pub event: Event,
    /// Clock reading in seconds
    pub at: i64,
}

impl LastAction {
    /// The reading as a UTC time; `None` if it is out of chrono's range
    pub fn time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.at, 0)
    }
}

#[derive(Debug)]
struct Inner<C: Clock> {
    machine: StateMachine<C>,
    last_action: Option<LastAction>,
}

/// A stopwatch that many callers can drive; `handle` calls serialize.
///
/// Clones refer to the same stopwatch.
#[derive(Debug)]
pub struct SharedStopwatch<C: Clock = SystemClock> {
    inner: Arc<Mutex<Inner<C>>>,
}

impl<C: Clock> Clone for SharedStopwatch<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Clock> SharedStopwatch<C> {
    /// Wrap an existing machine
    pub fn new(machine: StateMachine<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                machine,
                last_action: None,
            })),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Inner<C>>, StopwatchError> {
        self.inner
            .lock()
            .map_err(|e| StopwatchError::LockPoisoned(e.to_string()))
    }

    /// Offer `event` to the shared machine
    pub fn handle(&self, event: Event) -> Result<Outcome, StopwatchError> {
        let mut inner = self.lock()?;

        let outcome = inner.machine.handle(event);
        if let Ok(accepted) = &outcome {
            inner.last_action = Some(LastAction {
                event,
                at: accepted.at,
            });
            info!("Shared stopwatch accepted {}", event);
        }

        Ok(outcome)
    }

    /// Current state and recorded time
    pub fn snapshot(&self) -> Result<Snapshot, StopwatchError> {
        self.lock().map(|inner| inner.machine.snapshot())
    }

    /// Last accepted event and when it happened
    pub fn last_action(&self) -> Result<Option<LastAction>, StopwatchError> {
        self.lock().map(|inner| inner.last_action)
    }
}

impl<C: Clock> From<StateMachine<C>> for SharedStopwatch<C> {
    fn from(machine: StateMachine<C>) -> Self {
        Self::new(machine)
    }
}
