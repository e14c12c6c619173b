// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod persistence;
pub mod settings;
pub mod sinks;

pub use settings::{Settings, load_settings};
pub use sinks::sink_for;
