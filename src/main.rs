//! Stopwatch - an interactive command-line stopwatch
//!
//! This is the main entry point for the stopwatch application.

use tokio::io::{stdin, stdout, BufReader};
use tracing::info;

use stopwatch::{
    config::Config,
    console::CommandLoop,
    state::StateMachine,
    utils::shutdown_signal,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr so stdout only carries stopwatch output
    tracing_subscriber::fmt()
        .with_env_filter(format!("stopwatch={}", config.log_level()))
        .with_writer(std::io::stderr)
        .init();

    info!("Starting stopwatch v1.0.0");
    info!("Configuration: format={:?}, quiet={}", config.format, config.quiet);

    let mut machine = StateMachine::new();
    let mut repl = CommandLoop::new(
        BufReader::new(stdin()),
        stdout(),
        config.format,
        config.interactive(),
    );

    tokio::select! {
        result = repl.run(&mut machine) => result?,
        _ = shutdown_signal() => {
            info!("Interrupted, leaving command loop");
        }
    }

    info!("Stopwatch exited in state {}", machine.state());
    Ok(())
}
