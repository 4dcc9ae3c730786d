use anyhow::{Context, Result};

use linescribe::logging;
use linescribe::{Console, ConsoleConfig, LogLevel};

fn main() -> Result<()> {
    // Diagnostics go to stderr so they stay out of the transcript
    logging::init_diagnostics(LogLevel::Warning)?;

    let config = ConsoleConfig::default();
    let mut console = Console::stdio(&config).context("Failed to set up console")?;

    console.write_header("linescribe");
    console.write_info("Type lines to echo them, end input to finish.");
    console.set_margin_left(2);

    let mut count = 0usize;
    while let Some(line) = console.read_line().context("Failed to read input")? {
        if line.is_empty() {
            console.write_div();
            continue;
        }
        console.write_line(&line);
        count += 1;
    }

    console.set_margin_left(0);
    console.write_div();
    console.write_info(&format!("Echoed {} lines", count));

    tracing::debug!(entries = console.writer().history_entries().len(), "Session finished");
    Ok(())
}
