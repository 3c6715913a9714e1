//! Console module
//!
//! This module contains the command loop that reads user input, feeds the
//! stopwatch and prints what happened.

pub mod command;
pub mod repl;
pub mod responses;

pub use command::{Command, ParseError};
pub use repl::CommandLoop;
pub use responses::{OutputFormat, StatusLine};
