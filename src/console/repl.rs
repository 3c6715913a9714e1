//! The read-command / dispatch loop

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use super::{Command, OutputFormat, ParseError, StatusLine};
use crate::state::{Clock, StateMachine};

const BANNER: &str = "Hello!\n\
Enter \"0\" to start the timer\n\
Enter \"1\" to pause\n\
Enter \"2\" to continue\n\
Enter \"3\" to stop\n\
And enter \"-1\" to quit\n";

const PROMPT: &str = "Choose an action: ";

/// Reads commands from `reader`, drives a stopwatch, writes results to `writer`
pub struct CommandLoop<R, W> {
    reader: R,
    writer: W,
    format: OutputFormat,
    interactive: bool,
}

impl<R, W> CommandLoop<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    /// Create a loop; `interactive` controls the banner and prompt (text format only)
    pub fn new(reader: R, writer: W, format: OutputFormat, interactive: bool) -> Self {
        Self {
            reader,
            writer,
            format,
            interactive: interactive && format == OutputFormat::Text,
        }
    }

    /// Run until the user quits or input ends
    pub async fn run<C: Clock>(&mut self, machine: &mut StateMachine<C>) -> anyhow::Result<()> {
        info!("Command loop started");
        if self.interactive {
            self.writer.write_all(BANNER.as_bytes()).await?;
        }

        let mut buf = Vec::new();
        loop {
            if self.interactive {
                self.writer.write_all(PROMPT.as_bytes()).await?;
                self.writer.flush().await?;
            }

            buf.clear();
            if self.reader.read_until(b'\n', &mut buf).await? == 0 {
                debug!("End of input");
                self.emit(&StatusLine::quit()).await?;
                break;
            }

            // Undecodable bytes are bad input, not a broken stream
            let parsed = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => line.parse::<Command>(),
                Err(_) => Err(ParseError::Unreadable(
                    String::from_utf8_lossy(&buf).trim().to_string(),
                )),
            };

            let status = match parsed {
                Ok(Command::Quit) => {
                    self.emit(&StatusLine::quit()).await?;
                    break;
                }
                Ok(Command::Status) => StatusLine::from_snapshot(&machine.snapshot()),
                Ok(Command::Event(event)) => {
                    let outcome = machine.handle(event);
                    if let Err(rejected) = &outcome {
                        debug!("Ignoring {}: timer is {}", rejected.event, rejected.state);
                    }
                    StatusLine::from_outcome(&outcome)
                }
                Err(e) => {
                    debug!("Unparseable input: {:?}", e);
                    StatusLine::invalid(e.to_string())
                }
            };

            self.emit(&status).await?;
        }

        info!("Command loop finished");
        Ok(())
    }

    /// Give back the writer, e.g. to inspect what was written
    pub fn into_writer(self) -> W {
        self.writer
    }

    async fn emit(&mut self, status: &StatusLine) -> anyhow::Result<()> {
        let mut rendered = status.render(self.format)?;
        rendered.push('\n');
        self.writer.write_all(rendered.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }
}
