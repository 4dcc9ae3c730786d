//! Line-based console input

use std::io::{BufRead, BufReader, Stdin};

use crate::error::{Error, Result};

/// Reads one line at a time from a buffered source
#[derive(Debug)]
pub struct LineReader<R: BufRead = BufReader<Stdin>> {
    source: R,
}

impl LineReader<BufReader<Stdin>> {
    /// Create a reader on standard input
    pub fn stdin() -> Self {
        Self::new(BufReader::new(std::io::stdin()))
    }
}

impl<R: BufRead> LineReader<R> {
    /// Create a reader on any buffered source
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Read the next line without its terminator
    ///
    /// Blocks until a full line or end of input is available. Returns
    /// `Ok(None)` at end of input.
    pub fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.source.read_line(&mut line).map_err(Error::InputRead)?;

        if read == 0 {
            return Ok(None);
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(Some(line))
    }

    /// Consume the reader, returning the underlying source
    pub fn into_inner(self) -> R {
        self.source
    }
}
