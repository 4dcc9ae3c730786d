//! Logging for linescribe
//!
//! Provides the level threshold, the level-gated logger, the capped history
//! transcript, and the crate's own stderr diagnostics.

mod buffer;
mod diagnostics;
mod level;
mod logger;

pub use buffer::{HistoryBuffer, DEFAULT_HISTORY_CAPACITY, LINE_SEPARATOR};
pub use diagnostics::{default_directive, init_diagnostics};
pub use level::LogLevel;
pub use logger::{attribute_message, format_message, short_source_name, Logger};
