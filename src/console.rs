//! Console facade
//!
//! A `Console` bundles one line reader and one writer. The host application
//! builds it once and passes it to whatever needs console access; nothing in
//! the crate keeps global state.

use std::fmt::Display;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};
use std::path::Path;

use crate::config::ConsoleConfig;
use crate::error::Result;
use crate::input::LineReader;
use crate::logging::LogLevel;
use crate::output::Writer;

/// Facilitator for reading and writing on the console
#[derive(Debug)]
pub struct Console<R: BufRead = BufReader<Stdin>, W: Write = Stdout> {
    reader: LineReader<R>,
    writer: Writer<W>,
}

impl Console {
    /// Create a console on standard input and standard output
    pub fn stdio(config: &ConsoleConfig) -> Result<Self> {
        Ok(Self {
            reader: LineReader::stdin(),
            writer: Writer::stdout(config)?,
        })
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console on an arbitrary input source and output sink
    pub fn with_io(input: R, output: W, config: &ConsoleConfig) -> Result<Self> {
        Ok(Self {
            reader: LineReader::new(input),
            writer: Writer::with_config(output, config)?,
        })
    }

    /// Read a line from the console, `None` at end of input
    pub fn read_line(&mut self) -> Result<Option<String>> {
        self.reader.read_line()
    }

    /// Write a line, putting a line break at the end
    pub fn write_line(&mut self, line: &str) {
        self.writer.write_line(line);
    }

    /// Write the text form of any displayable value as a line
    pub fn write_display<T: Display + ?Sized>(&mut self, value: &T) {
        self.writer.write_line(&value.to_string());
    }

    /// Write lines, putting a line break at the end of each
    pub fn write_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.writer.write_lines(lines);
    }

    /// Write content without a line break
    pub fn write(&mut self, content: &str) {
        self.writer.write(content);
    }

    /// Write the lines of a text file
    pub fn write_file_lines(&mut self, file: &Path) -> Result<()> {
        self.writer.write_file_lines(file)
    }

    /// Write the lines of a text file with line numbers on the left
    pub fn write_file_lines_with_enumeration(&mut self, file: &Path) -> Result<()> {
        self.writer.write_file_lines_with_enumeration(file)
    }

    /// Write a division line made of the default symbol
    pub fn write_div(&mut self) {
        self.writer.write_div();
    }

    /// Write a division line made of `symbol`
    pub fn write_div_with(&mut self, symbol: &str) {
        self.writer.write_div_with(symbol);
    }

    /// Write a title between two dividers
    pub fn write_header(&mut self, title: &str) {
        self.writer.write_header(title);
    }

    /// Write a title between two dividers made of `symbol`
    pub fn write_header_with(&mut self, title: &str, symbol: &str) {
        self.writer.write_header_with(title, symbol);
    }

    /// Display an error message. Format: `[ERROR] <message>`
    pub fn write_error(&mut self, message: &str) -> bool {
        self.writer.write_error(message)
    }

    /// Display a warning message. Format: `[WARN] <message>`
    pub fn write_warning(&mut self, message: &str) -> bool {
        self.writer.write_warning(message)
    }

    /// Display an information message. Format: `[INFO] <message>`
    pub fn write_info(&mut self, message: &str) -> bool {
        self.writer.write_info(message)
    }

    /// Display a debug message. Format: `[DEBUG] <message>`
    pub fn write_debug(&mut self, message: &str) -> bool {
        self.writer.write_debug(message)
    }

    /// Display a debug message. Format: `[DEBUG] { <source> } <message>`
    pub fn write_debug_from(&mut self, source: &str, message: &str) -> Result<bool> {
        self.writer.write_debug_from(source, message)
    }

    /// Display a debug message attributed to the type `T`
    pub fn write_debug_for<T: ?Sized>(&mut self, message: &str) -> bool {
        self.writer.write_debug_for::<T>(message)
    }

    /// Clear the history of messages sent to the console
    pub fn clear_history(&mut self) {
        self.writer.clear_history();
    }

    /// Export the history to a file, returning whether it was fully written
    pub fn dump_to(&self, path: &Path) -> bool {
        self.writer.dump_to(path)
    }

    /// Get the messages sent to the console
    pub fn history(&self) -> Vec<String> {
        self.writer.history()
    }

    /// Set the distance between the left edge and plain messages
    pub fn set_margin_left(&mut self, margin: usize) {
        self.writer.set_margin_left(margin);
    }

    /// Get the current left margin
    pub fn margin_left(&self) -> usize {
        self.writer.margin_left()
    }

    /// Set the threshold deciding which messages are displayed
    pub fn set_logger_level(&mut self, level: LogLevel) {
        self.writer.set_logger_level(level);
    }

    /// Get the threshold deciding which messages are displayed
    pub fn logger_level(&self) -> LogLevel {
        self.writer.logger_level()
    }

    /// Get the underlying writer
    pub fn writer(&self) -> &Writer<W> {
        &self.writer
    }

    /// Get the output sink
    pub fn output(&self) -> &W {
        self.writer.sink()
    }

    /// Consume the console, returning its input source and output sink
    pub fn into_parts(self) -> (R, W) {
        (self.reader.into_inner(), self.writer.into_sink())
    }
}
