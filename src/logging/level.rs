//! Message severities and threshold filtering

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Log level, ordered by increasing verbosity
///
/// Used both as the severity of a single message and as the logger threshold.
/// A message is displayed when its level is at most the threshold, so `Off`
/// as a threshold silences everything.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Disables all messages
    Off = 0,
    /// Displays only error messages
    Error = 1,
    /// Displays error and warning messages
    #[serde(alias = "warn")]
    Warning = 2,
    /// Displays error, warning and info messages
    #[default]
    Info = 3,
    /// Displays every message
    Debug = 4,
}

impl LogLevel {
    /// All levels from least to most verbose
    pub const ALL: [LogLevel; 5] = [
        LogLevel::Off,
        LogLevel::Error,
        LogLevel::Warning,
        LogLevel::Info,
        LogLevel::Debug,
    ];

    /// Get the tag shown in front of messages of this level
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Off => "OFF",
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Check if a message of this level passes the given threshold
    pub fn should_display(self, threshold: LogLevel) -> bool {
        self != LogLevel::Off && self <= threshold
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LogLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "off" => Ok(LogLevel::Off),
            "error" => Ok(LogLevel::Error),
            "warn" | "warning" => Ok(LogLevel::Warning),
            "info" => Ok(LogLevel::Info),
            "debug" => Ok(LogLevel::Debug),
            other => Err(Error::invalid_argument(format!(
                "Unknown log level '{}'",
                other
            ))),
        }
    }
}

impl From<LogLevel> for tracing::level_filters::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => tracing::level_filters::LevelFilter::OFF,
            LogLevel::Error => tracing::level_filters::LevelFilter::ERROR,
            LogLevel::Warning => tracing::level_filters::LevelFilter::WARN,
            LogLevel::Info => tracing::level_filters::LevelFilter::INFO,
            LogLevel::Debug => tracing::level_filters::LevelFilter::DEBUG,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_matches_rank() {
        for threshold in LogLevel::ALL {
            for level in &LogLevel::ALL[1..] {
                assert_eq!(
                    level.should_display(threshold),
                    (*level as u8) <= (threshold as u8),
                    "{} at threshold {}",
                    level,
                    threshold
                );
            }
        }
    }

    #[test]
    fn test_off_displays_nothing() {
        for level in LogLevel::ALL {
            assert!(!level.should_display(LogLevel::Off));
        }
        assert!(!LogLevel::Off.should_display(LogLevel::Debug));
    }

    #[test]
    fn test_warning_threshold() {
        assert!(LogLevel::Error.should_display(LogLevel::Warning));
        assert!(LogLevel::Warning.should_display(LogLevel::Warning));
        assert!(!LogLevel::Info.should_display(LogLevel::Warning));
        assert!(!LogLevel::Debug.should_display(LogLevel::Warning));
    }

    #[test]
    fn test_default_is_info() {
        assert_eq!(LogLevel::default(), LogLevel::Info);
    }

    #[test]
    fn test_tags() {
        assert_eq!(LogLevel::Warning.as_str(), "WARN");
        assert_eq!(LogLevel::Debug.to_string(), "DEBUG");
    }

    #[test]
    fn test_parse_level() {
        assert_eq!("warn".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!(" Debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert_eq!("off".parse::<LogLevel>().unwrap(), LogLevel::Off);

        let err = "verbose".parse::<LogLevel>().unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_into_tracing_filter() {
        let filter: tracing::level_filters::LevelFilter = LogLevel::Warning.into();
        assert_eq!(filter, tracing::level_filters::LevelFilter::WARN);
    }
}
