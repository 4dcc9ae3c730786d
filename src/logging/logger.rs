//! Level-gated severity messages
//!
//! The logger owns only its threshold. Output goes through the transcript it
//! is handed, which is the same one the writer uses.

use std::io::Write;
use std::path::Path;

use super::level::LogLevel;
use crate::error::{Error, Result};
use crate::output::Transcript;

/// Emits `[TAG] message` lines for messages that pass the threshold
#[derive(Debug, Clone, Default)]
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Create a logger with the given threshold
    pub fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Get the current threshold
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// Replace the threshold for all subsequent messages
    pub fn set_level(&mut self, level: LogLevel) {
        if level != self.level {
            tracing::debug!(from = %self.level, to = %level, "Logger level changed");
        }
        self.level = level;
    }

    /// Check if a message of the given level would be displayed
    pub fn should_display(&self, level: LogLevel) -> bool {
        level.should_display(self.level)
    }

    /// Emit a message at the given level
    ///
    /// Returns `false` without touching the console or the history when the
    /// level is filtered out. The history records the bare message.
    pub fn log<W: Write>(
        &self,
        transcript: &mut Transcript<W>,
        level: LogLevel,
        message: &str,
    ) -> bool {
        if !self.should_display(level) {
            return false;
        }

        transcript.emit_line(&format_message(level, message), message);
        true
    }

    /// Emit an error message
    pub fn write_error<W: Write>(&self, transcript: &mut Transcript<W>, message: &str) -> bool {
        self.log(transcript, LogLevel::Error, message)
    }

    /// Emit a warning message
    pub fn write_warning<W: Write>(&self, transcript: &mut Transcript<W>, message: &str) -> bool {
        self.log(transcript, LogLevel::Warning, message)
    }

    /// Emit an information message
    pub fn write_info<W: Write>(&self, transcript: &mut Transcript<W>, message: &str) -> bool {
        self.log(transcript, LogLevel::Info, message)
    }

    /// Emit a debug message
    pub fn write_debug<W: Write>(&self, transcript: &mut Transcript<W>, message: &str) -> bool {
        self.log(transcript, LogLevel::Debug, message)
    }

    /// Emit a debug message attributed to a source component
    ///
    /// The message becomes `{ Source } message`, where `Source` is the last
    /// segment of `source` (`app::net::Client` and `app.net.Client` both give
    /// `Client`).
    pub fn write_debug_from<W: Write>(
        &self,
        transcript: &mut Transcript<W>,
        source: &str,
        message: &str,
    ) -> Result<bool> {
        let name = short_source_name(source)
            .ok_or_else(|| Error::invalid_argument("Source cannot be empty"))?;

        Ok(self.write_debug(transcript, &attribute_message(name, message)))
    }

    /// Dump the shared history to a file
    ///
    /// An empty path is rejected; I/O failures are reported through the
    /// returned flag only.
    pub fn dump_to<W: Write>(&self, transcript: &Transcript<W>, path: &Path) -> Result<bool> {
        if path.as_os_str().is_empty() {
            return Err(Error::invalid_argument("Output cannot be empty"));
        }
        Ok(transcript.history().dump_to(path))
    }
}

/// Format a message as it appears on the console
pub fn format_message(level: LogLevel, message: &str) -> String {
    format!("[{}] {}", level.as_str(), message)
}

/// Prefix a message with the name of the component it came from
pub fn attribute_message(source_name: &str, message: &str) -> String {
    format!("{{ {} }} {}", source_name, message)
}

/// Get the last segment of a path-like source identifier
///
/// Generic arguments are dropped, so `Vec<u8>` becomes `Vec`. Returns `None`
/// when nothing usable remains.
pub fn short_source_name(source: &str) -> Option<&str> {
    let source = source.trim();
    let source = source.split('<').next().unwrap_or(source);
    let name = source
        .rsplit(|c: char| c == ':' || c == '.')
        .next()
        .unwrap_or(source)
        .trim();

    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logging::HistoryBuffer;
    use tempfile::TempDir;

    fn transcript() -> Transcript<Vec<u8>> {
        Transcript::new(Vec::new(), HistoryBuffer::new())
    }

    fn console(transcript: &Transcript<Vec<u8>>) -> String {
        String::from_utf8_lossy(transcript.sink()).into_owned()
    }

    #[test]
    fn test_default_level_is_info() {
        assert_eq!(Logger::default().level(), LogLevel::Info);
    }

    #[test]
    fn test_tagged_console_bare_history() {
        let logger = Logger::new(LogLevel::Debug);
        let mut transcript = transcript();

        assert!(logger.write_error(&mut transcript, "disk full"));
        assert!(logger.write_debug(&mut transcript, "retrying"));

        assert_eq!(console(&transcript), "[ERROR] disk full\n[DEBUG] retrying\n");
        assert_eq!(transcript.history().entries(), &["disk full", "retrying"][..]);
    }

    #[test]
    fn test_warning_threshold_scenario() {
        let logger = Logger::new(LogLevel::Warning);
        let mut transcript = transcript();

        logger.write_error(&mut transcript, "e");
        logger.write_warning(&mut transcript, "w");
        logger.write_info(&mut transcript, "i");
        logger.write_debug(&mut transcript, "d");

        assert_eq!(transcript.history().entries(), &["e", "w"][..]);
        assert_eq!(console(&transcript), "[ERROR] e\n[WARN] w\n");
    }

    #[test]
    fn test_off_has_no_effect() {
        let logger = Logger::new(LogLevel::Off);
        let mut transcript = transcript();

        assert!(!logger.write_error(&mut transcript, "error"));
        assert!(!logger.write_warning(&mut transcript, "warning"));
        assert!(!logger.write_info(&mut transcript, "info"));
        assert!(!logger.write_debug(&mut transcript, "debug"));

        assert!(transcript.history().is_empty());
        assert!(transcript.sink().is_empty());
    }

    #[test]
    fn test_empty_message_is_accepted() {
        let logger = Logger::default();
        let mut transcript = transcript();

        assert!(logger.write_info(&mut transcript, ""));
        assert_eq!(transcript.history().entries(), &[""][..]);
        assert_eq!(console(&transcript), "[INFO] \n");
    }

    #[test]
    fn test_set_level_applies_to_later_messages() {
        let mut logger = Logger::new(LogLevel::Error);
        let mut transcript = transcript();

        logger.write_info(&mut transcript, "hidden");
        logger.set_level(LogLevel::Info);
        logger.write_info(&mut transcript, "shown");

        assert_eq!(logger.level(), LogLevel::Info);
        assert_eq!(transcript.history().entries(), &["shown"][..]);
    }

    #[test]
    fn test_debug_from_prefixes_short_name() {
        let logger = Logger::new(LogLevel::Debug);
        let mut transcript = transcript();

        let shown = logger
            .write_debug_from(&mut transcript, "app::net::Client", "connected")
            .unwrap();

        assert!(shown);
        assert_eq!(
            transcript.history().entries(),
            &["{ Client } connected"][..]
        );
    }

    #[test]
    fn test_debug_from_respects_debug_threshold() {
        let logger = Logger::new(LogLevel::Error);
        let mut transcript = transcript();

        let shown = logger
            .write_debug_from(&mut transcript, "Client", "connected")
            .unwrap();

        assert!(!shown);
        assert!(transcript.history().is_empty());
    }

    #[test]
    fn test_debug_from_rejects_empty_source() {
        let logger = Logger::new(LogLevel::Debug);
        let mut transcript = transcript();

        let err = logger
            .write_debug_from(&mut transcript, "  ", "message")
            .unwrap_err();

        assert!(err.is_invalid_argument());
        assert!(transcript.history().is_empty());
    }

    #[test]
    fn test_short_source_name() {
        assert_eq!(short_source_name("wniemiec.io.Output"), Some("Output"));
        assert_eq!(short_source_name("crate::output::Writer"), Some("Writer"));
        assert_eq!(
            short_source_name("linescribe::output::Writer<alloc::vec::Vec<u8>>"),
            Some("Writer")
        );
        assert_eq!(short_source_name("Plain"), Some("Plain"));
        assert_eq!(short_source_name("crate::"), None);
        assert_eq!(short_source_name(""), None);
    }

    #[test]
    fn test_dump_rejects_empty_path() {
        let logger = Logger::default();
        let transcript = transcript();

        let err = logger.dump_to(&transcript, Path::new("")).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_dump_writes_shared_history() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("log.txt");
        let logger = Logger::default();
        let mut transcript = transcript();
        transcript.emit_line("plain", "plain");
        logger.write_warning(&mut transcript, "careful");

        assert!(logger.dump_to(&transcript, &path).unwrap());

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().collect::<Vec<_>>(), vec!["plain", "careful"]);
    }
}
