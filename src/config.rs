//! Configuration and CLI argument handling

use clap::Parser;

use crate::console::OutputFormat;

/// CLI argument parsing structure
#[derive(Parser, Debug)]
#[command(name = "stopwatch")]
#[command(about = "An interactive command-line stopwatch")]
#[command(version = "1.0.0")]
pub struct Config {
    /// Output format for status lines
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Skip the greeting and the prompt
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Whether the command loop should greet and prompt
    pub fn interactive(&self) -> bool {
        !self.quiet
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }
}
