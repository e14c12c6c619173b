// crates/shared-kernel/src/value_objects/mod.rs
pub mod base;
pub mod digit_count;

pub use base::Base;
pub use digit_count::DigitCount;
