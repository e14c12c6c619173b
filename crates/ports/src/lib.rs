//! # Ports
//!
//! Interface definitions for the outside world.
//!
//! - [`frames`]: data transfer objects emitted while a counter runs
//! - [`sink`]: where those frames are delivered
//!
//! The use case layer depends on these traits only, never on a concrete
//! writer or serialization format.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod frames;
pub mod sink;

pub use frames::{Frame, RunHeader, RunSummary};
pub use sink::FrameSink;
