//! Parsing user input into commands

use std::str::FromStr;
use thiserror::Error;

use crate::state::Event;

/// Something the user asked the command loop to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Forward an event to the stopwatch
    Event(Event),
    /// Print the current state without changing it
    Status,
    /// Leave the command loop
    Quit,
}

/// Input that could not be turned into a command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("Invalid input. Try again.")]
    Unreadable(String),
    #[error("Invalid input.")]
    UnknownCode(i64),
}

impl FromStr for Command {
    type Err = ParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let input = input.trim();

        if let Ok(code) = input.parse::<i64>() {
            return match code {
                0 => Ok(Command::Event(Event::Start)),
                1 => Ok(Command::Event(Event::Pause)),
                2 => Ok(Command::Event(Event::Continue)),
                3 => Ok(Command::Event(Event::Stop)),
                -1 => Ok(Command::Quit),
                other => Err(ParseError::UnknownCode(other)),
            };
        }

        match input.to_ascii_lowercase().as_str() {
            "start" => Ok(Command::Event(Event::Start)),
            "pause" => Ok(Command::Event(Event::Pause)),
            "continue" | "resume" => Ok(Command::Event(Event::Continue)),
            "stop" => Ok(Command::Event(Event::Stop)),
            "status" => Ok(Command::Status),
            "quit" | "exit" => Ok(Command::Quit),
            _ => Err(ParseError::Unreadable(input.to_string())),
        }
    }
}
