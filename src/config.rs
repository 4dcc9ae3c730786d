//! Configuration for a console

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::{LogLevel, DEFAULT_HISTORY_CAPACITY};
use crate::output::{DEFAULT_DIVIDER_SYMBOL, DEFAULT_DIVIDER_WIDTH, DEFAULT_ENUMERATION_WIDTH};

/// Start-up settings of a console
///
/// Margin and level can still be changed on the console afterwards; the
/// remaining fields are fixed for its lifetime. The struct is serde-friendly so
/// a host application can embed it in its own configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Spaces prepended to every plain line
    #[serde(default)]
    pub margin_left: usize,

    /// Threshold for severity messages (default: info)
    #[serde(default)]
    pub level: LogLevel,

    /// History entries kept before the buffer is reset (default: 80000)
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,

    /// Columns used by dividers and for centering header titles (default: 80)
    #[serde(default = "default_divider_width")]
    pub divider_width: usize,

    /// Symbol used by dividers when none is given (default: "-")
    #[serde(default = "default_divider_symbol")]
    pub divider_symbol: String,

    /// Width of the line-number column in enumerated file output (default: 5)
    #[serde(default = "default_enumeration_width")]
    pub enumeration_width: usize,
}

fn default_history_capacity() -> usize {
    DEFAULT_HISTORY_CAPACITY
}

fn default_divider_width() -> usize {
    DEFAULT_DIVIDER_WIDTH
}

fn default_divider_symbol() -> String {
    DEFAULT_DIVIDER_SYMBOL.to_string()
}

fn default_enumeration_width() -> usize {
    DEFAULT_ENUMERATION_WIDTH
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            margin_left: 0,
            level: LogLevel::default(),
            history_capacity: default_history_capacity(),
            divider_width: default_divider_width(),
            divider_symbol: default_divider_symbol(),
            enumeration_width: default_enumeration_width(),
        }
    }
}

impl ConsoleConfig {
    /// Set the initial left margin
    pub fn with_margin_left(mut self, margin_left: usize) -> Self {
        self.margin_left = margin_left;
        self
    }

    /// Set the initial logger threshold
    pub fn with_level(mut self, level: LogLevel) -> Self {
        self.level = level;
        self
    }

    /// Set the history capacity
    pub fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Check that every value is usable
    pub fn validate(&self) -> Result<()> {
        if self.history_capacity == 0 {
            return Err(Error::invalid_argument("History capacity must be positive"));
        }
        if self.divider_width == 0 {
            return Err(Error::invalid_argument("Divider width must be positive"));
        }
        if self.divider_symbol.is_empty() {
            return Err(Error::invalid_argument("Divider symbol cannot be empty"));
        }
        Ok(())
    }
}
