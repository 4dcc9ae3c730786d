//! Console output
//!
//! The writer formats plain lines, dividers, headers and file dumps; the
//! transcript pairs the console sink with the history they are recorded in.

mod format;
mod transcript;
mod writer;

pub use format::{
    build_div, build_enumerated_line, build_margin, build_title, split_lines,
    DEFAULT_DIVIDER_SYMBOL, DEFAULT_DIVIDER_WIDTH, DEFAULT_ENUMERATION_WIDTH,
};
pub use transcript::Transcript;
pub use writer::{resolve_path, Writer};
