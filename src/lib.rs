//! linescribe - console I/O facade with an in-memory transcript
//!
//! Reads lines from standard input, writes formatted output (lines, dividers,
//! centered headers, file dumps), filters severity messages by level, and
//! records everything written so it can be inspected, cleared or dumped.

pub mod config;
pub mod console;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;

pub use config::ConsoleConfig;
pub use console::Console;
pub use error::{Error, Result};
pub use input::LineReader;
pub use logging::{HistoryBuffer, LogLevel, Logger};
pub use output::{Transcript, Writer};
