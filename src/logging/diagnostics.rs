//! Internal diagnostics via tracing
//!
//! The crate reports its own events (history resets, level changes, dump
//! outcomes) through `tracing`. This sets up a subscriber that prints them on
//! stderr so they never mix with console output or enter the history.

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use super::level::LogLevel;

/// Build the fallback filter directive used when `RUST_LOG` is unset
pub fn default_directive(level: LogLevel) -> String {
    format!(
        "{}={}",
        env!("CARGO_CRATE_NAME"),
        level.as_str().to_ascii_lowercase()
    )
}

/// Initialize stderr diagnostics
///
/// `RUST_LOG` takes precedence; otherwise only this crate's events at or
/// above `level` are shown. Fails if a global subscriber is already set.
pub fn init_diagnostics(level: LogLevel) -> Result<()> {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(level).into());

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .context("Failed to initialize diagnostics")
}
