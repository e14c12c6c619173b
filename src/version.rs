// src/version.rs
//! Version string reported by `--version` and structured output.

/// Application version derived from Cargo.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
