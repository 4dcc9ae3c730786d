//! In-memory transcript of console output
//!
//! Stores every line written through the console, capped at a fixed number of
//! entries. Once the cap is reached the next append wipes the whole buffer
//! instead of evicting the oldest entry.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default maximum number of entries kept in the history
pub const DEFAULT_HISTORY_CAPACITY: usize = 80_000;

/// Line separator used when dumping the history to disk
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Capacity-bounded, append-only record of emitted lines
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    /// Entries in insertion order
    entries: Vec<String>,
    /// Number of entries that triggers a reset on the next append
    capacity: usize,
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl HistoryBuffer {
    /// Create an empty history with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    /// Create an empty history with a custom capacity
    ///
    /// A capacity of zero is treated as one so an append always leaves the
    /// new line in the buffer.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Append a line, discarding everything first if the buffer is full
    pub fn append(&mut self, line: impl Into<String>) {
        if self.entries.len() >= self.capacity {
            tracing::debug!(
                discarded = self.entries.len(),
                "History reached capacity, resetting"
            );
            self.entries = Vec::new();
        }
        self.entries.push(line.into());
    }

    /// Remove every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Get an owned copy of all entries
    pub fn snapshot(&self) -> Vec<String> {
        self.entries.clone()
    }

    /// Borrow all entries in insertion order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Get the most recent entry
    pub fn last(&self) -> Option<&str> {
        self.entries.last().map(String::as_str)
    }

    /// Get the number of entries in the buffer
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the buffer is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get the configured capacity
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Write all entries to a file, one per line, replacing its contents
    ///
    /// Best effort: failures are not propagated. Returns `true` only when every
    /// entry reached the file.
    pub fn dump_to(&self, path: &Path) -> bool {
        match self.try_dump_to(path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), entries = self.entries.len(), "Dumped history");
                true
            }
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "History dump failed");
                false
            }
        }
    }

    fn try_dump_to(&self, path: &Path) -> std::io::Result<()> {
        let mut out = BufWriter::new(File::create(path)?);
        for entry in &self.entries {
            out.write_all(entry.as_bytes())?;
            out.write_all(LINE_SEPARATOR.as_bytes())?;
        }
        out.flush()
    }
}
