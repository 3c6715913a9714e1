//! Rendering of command results

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::state::{Action, Outcome, Snapshot, State};

/// How the command loop writes its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable message per line
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Structured status line emitted after each command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusLine {
    pub status: String,
    pub message: String,
    pub state: Option<State>,
    pub action: Option<Action>,
    pub accumulated_seconds: Option<u64>,
    pub timestamp: DateTime<Utc>,
}

impl StatusLine {
    fn new(status: &str, message: String) -> Self {
        Self {
            status: status.to_string(),
            message,
            state: None,
            action: None,
            accumulated_seconds: None,
            timestamp: Utc::now(),
        }
    }

    /// Line for an event the stopwatch processed
    pub fn from_outcome(outcome: &Outcome) -> Self {
        match outcome {
            Ok(accepted) => Self {
                state: Some(accepted.to),
                action: Some(accepted.action),
                accumulated_seconds: Some(accepted.accumulated_seconds),
                ..Self::new("accepted", accepted.message.clone())
            },
            Err(rejected) => Self {
                state: Some(rejected.state),
                ..Self::new("rejected", rejected.message())
            },
        }
    }

    /// Line for a status query
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            state: Some(snapshot.state),
            accumulated_seconds: Some(snapshot.accumulated_seconds),
            ..Self::new("status", snapshot.message())
        }
    }

    /// Line for input that never reached the stopwatch
    pub fn invalid(message: String) -> Self {
        Self::new("invalid", message)
    }

    /// Line for leaving the loop
    pub fn quit() -> Self {
        Self::new("quit", "Quitting program...".to_string())
    }

    /// Render in the requested format, without a trailing newline
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Text => Ok(self.message.clone()),
            OutputFormat::Json => serde_json::to_string(self),
        }
    }
}
