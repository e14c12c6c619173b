//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: drives a counter for a fixed number of iterations
//! - [`dto`]: data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod dto;
pub mod orchestrator;

pub use dto::RunPlan;
pub use orchestrator::RunCounter;
