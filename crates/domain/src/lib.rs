//! # Domain
//!
//! Positional counters with per-digit wraparound and ripple carry.
//!
//! - [`digit`]: a single modulo-N digit
//! - [`counter`]: a fixed-length sequence of digits driven by ripple carry
//! - [`tally`]: the stepping/rendering surface shared by both
//! - [`options`]: run options (increment mode, output format)

#![allow(clippy::multiple_crate_versions)]

pub mod counter;
pub mod digit;
pub mod options;
pub mod tally;

pub use counter::Counter;
pub use digit::Digit;
pub use options::{IncrementMode, OutputFormat};
pub use tally::{SEPARATOR, Tally};
