//! Formatted console output
//!
//! Everything written here is also recorded in the history. Severity messages
//! are handed to the logger, which shares the same transcript.

use std::io::{Stdout, Write};
use std::path::{Component, Path, PathBuf};

use super::format::{
    build_div, build_enumerated_line, build_margin, build_title, split_lines,
    DEFAULT_DIVIDER_SYMBOL, DEFAULT_DIVIDER_WIDTH, DEFAULT_ENUMERATION_WIDTH,
};
use super::transcript::Transcript;
use crate::config::ConsoleConfig;
use crate::error::{Error, Result};
use crate::logging::{attribute_message, short_source_name, HistoryBuffer, LogLevel, Logger};

/// Writes lines, dividers, headers and files to a console sink
#[derive(Debug)]
pub struct Writer<W: Write = Stdout> {
    transcript: Transcript<W>,
    logger: Logger,
    margin_left: usize,
    divider_width: usize,
    divider_symbol: String,
    enumeration_width: usize,
}

impl Writer<Stdout> {
    /// Create a writer on standard output from a validated configuration
    pub fn stdout(config: &ConsoleConfig) -> Result<Self> {
        Self::with_config(std::io::stdout(), config)
    }
}

impl<W: Write> Writer<W> {
    /// Create a writer on the given sink with default settings
    pub fn new(sink: W) -> Self {
        Self {
            transcript: Transcript::new(sink, HistoryBuffer::new()),
            logger: Logger::default(),
            margin_left: 0,
            divider_width: DEFAULT_DIVIDER_WIDTH,
            divider_symbol: DEFAULT_DIVIDER_SYMBOL.to_string(),
            enumeration_width: DEFAULT_ENUMERATION_WIDTH,
        }
    }

    /// Create a writer on the given sink from a validated configuration
    pub fn with_config(sink: W, config: &ConsoleConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            transcript: Transcript::new(sink, HistoryBuffer::with_capacity(config.history_capacity)),
            logger: Logger::new(config.level),
            margin_left: config.margin_left,
            divider_width: config.divider_width,
            divider_symbol: config.divider_symbol.clone(),
            enumeration_width: config.enumeration_width,
        })
    }

    /// Write a line with the current margin
    pub fn write_line(&mut self, content: &str) {
        let line = self.with_margin(content);
        self.transcript.emit_line(&line, line.as_str());
    }

    /// Write each item as its own line
    pub fn write_lines<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_line(line.as_ref());
        }
    }

    /// Write content with the current margin but no line break
    pub fn write(&mut self, content: &str) {
        let text = self.with_margin(content);
        self.transcript.emit(&text);
    }

    /// Write every line of a text file
    pub fn write_file_lines(&mut self, path: &Path) -> Result<()> {
        let (path, content) = read_file(path)?;
        tracing::debug!(path = %path.display(), "Echoing file");

        for line in split_lines(&content) {
            self.write_line(line);
        }
        Ok(())
    }

    /// Write every line of a text file prefixed with its line number
    ///
    /// The margin is not applied here, and the history records the lines
    /// without their numbers.
    pub fn write_file_lines_with_enumeration(&mut self, path: &Path) -> Result<()> {
        let (path, content) = read_file(path)?;
        tracing::debug!(path = %path.display(), "Echoing file with line numbers");

        for (index, line) in split_lines(&content).into_iter().enumerate() {
            let numbered = build_enumerated_line(index + 1, line, self.enumeration_width);
            self.transcript.emit_line(&numbered, line);
        }
        Ok(())
    }

    /// Write a divider using the default symbol
    pub fn write_div(&mut self) {
        let div = build_div(&self.divider_symbol, self.divider_width);
        self.write_line(&div);
    }

    /// Write a divider using `symbol`
    pub fn write_div_with(&mut self, symbol: &str) {
        self.write_line(&build_div(symbol, self.divider_width));
    }

    /// Write a centered title between two default dividers
    pub fn write_header(&mut self, title: &str) {
        let symbol = self.divider_symbol.clone();
        self.write_header_with(title, &symbol);
    }

    /// Write a centered title between two dividers made of `symbol`
    pub fn write_header_with(&mut self, title: &str, symbol: &str) {
        self.write_div_with(symbol);
        self.write_line(&build_title(title, self.divider_width));
        self.write_div_with(symbol);
    }

    /// Display an error message as `[ERROR] message`
    pub fn write_error(&mut self, message: &str) -> bool {
        self.logger.write_error(&mut self.transcript, message)
    }

    /// Display a warning message as `[WARN] message`
    pub fn write_warning(&mut self, message: &str) -> bool {
        self.logger.write_warning(&mut self.transcript, message)
    }

    /// Display an information message as `[INFO] message`
    pub fn write_info(&mut self, message: &str) -> bool {
        self.logger.write_info(&mut self.transcript, message)
    }

    /// Display a debug message as `[DEBUG] message`
    pub fn write_debug(&mut self, message: &str) -> bool {
        self.logger.write_debug(&mut self.transcript, message)
    }

    /// Display a debug message attributed to `source`
    pub fn write_debug_from(&mut self, source: &str, message: &str) -> Result<bool> {
        self.logger
            .write_debug_from(&mut self.transcript, source, message)
    }

    /// Display a debug message attributed to the type `T`
    pub fn write_debug_for<T: ?Sized>(&mut self, message: &str) -> bool {
        let source = std::any::type_name::<T>();
        let name = short_source_name(source).unwrap_or(source);
        self.logger
            .write_debug(&mut self.transcript, &attribute_message(name, message))
    }

    /// Clear the history
    pub fn clear_history(&mut self) {
        self.transcript.history_mut().clear();
    }

    /// Dump the history to a file; see [`HistoryBuffer::dump_to`]
    pub fn dump_to(&self, path: &Path) -> bool {
        self.transcript.history().dump_to(path)
    }

    /// Get a copy of the history
    pub fn history(&self) -> Vec<String> {
        self.transcript.history().snapshot()
    }

    /// Borrow the history entries
    pub fn history_entries(&self) -> &[String] {
        self.transcript.history().entries()
    }

    /// Set the number of spaces prepended to plain lines
    pub fn set_margin_left(&mut self, margin: usize) {
        self.margin_left = margin;
    }

    /// Get the current left margin
    pub fn margin_left(&self) -> usize {
        self.margin_left
    }

    /// Set the threshold for severity messages
    pub fn set_logger_level(&mut self, level: LogLevel) {
        self.logger.set_level(level);
    }

    /// Get the threshold for severity messages
    pub fn logger_level(&self) -> LogLevel {
        self.logger.level()
    }

    /// Get the console sink
    pub fn sink(&self) -> &W {
        self.transcript.sink()
    }

    /// Consume the writer, returning the console sink
    pub fn into_sink(self) -> W {
        self.transcript.into_sink()
    }

    fn with_margin(&self, content: &str) -> String {
        let mut line = build_margin(self.margin_left);
        line.push_str(content);
        line
    }
}

/// Read a whole text file after resolving its path
fn read_file(path: &Path) -> Result<(PathBuf, String)> {
    let path = resolve_path(path);
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok((path, content)),
        Err(source) => Err(Error::FileRead { path, source }),
    }
}

/// Make a path absolute and remove `.` and `..` components
pub fn resolve_path(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };
    normalize_path(&absolute)
}

/// Lexically normalize a path without touching the filesystem
fn normalize_path(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}
