//! Console sink paired with the history buffer
//!
//! Both the writer and the logger emit through a single `Transcript`, which
//! keeps plain output and severity messages interleaved in one history.

use std::io::Write;

use crate::logging::HistoryBuffer;

/// Console sink plus the history of what was written to it
#[derive(Debug)]
pub struct Transcript<W: Write> {
    sink: W,
    history: HistoryBuffer,
}

impl<W: Write> Transcript<W> {
    /// Create a transcript over a sink with an empty history
    pub fn new(sink: W, history: HistoryBuffer) -> Self {
        Self { sink, history }
    }

    /// Print a line on the console and record an entry in the history
    ///
    /// The console text and the recorded entry may differ (tagged or
    /// enumerated output records the bare text).
    pub fn emit_line(&mut self, console_text: &str, entry: impl Into<String>) {
        // A broken console must not abort the caller
        if let Err(e) = writeln!(self.sink, "{}", console_text) {
            tracing::trace!(error = %e, "Console write failed");
        }
        self.history.append(entry);
    }

    /// Print text on the console without a line break and record it
    pub fn emit(&mut self, text: &str) {
        let result = self
            .sink
            .write_all(text.as_bytes())
            .and_then(|_| self.sink.flush());
        if let Err(e) = result {
            tracing::trace!(error = %e, "Console write failed");
        }
        self.history.append(text);
    }

    /// Get the history
    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Get mutable access to the history
    pub fn history_mut(&mut self) -> &mut HistoryBuffer {
        &mut self.history
    }

    /// Get the console sink
    pub fn sink(&self) -> &W {
        &self.sink
    }

    /// Consume the transcript, returning the console sink
    pub fn into_sink(self) -> W {
        self.sink
    }
}
