// crates/ports/src/frames.rs
use modulo_counter_domain::IncrementMode;
use serde::Serialize;

/// Emitted once, before the first frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunHeader {
    pub label: String,
    /// `None` when the counter was built from an unsupported radix.
    pub radix: Option<u32>,
    pub digits: usize,
    pub iterations: usize,
    pub mode: IncrementMode,
}

impl RunHeader {
    pub const fn is_single_digit(&self) -> bool {
        self.digits == 1
    }
}

/// One observed state of the counter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub index: usize,
    pub values: Vec<u8>,
    pub text: String,
}

/// Emitted once, after the last frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    pub frames: usize,
    pub final_values: Vec<u8>,
    /// How many times the whole counter rolled over to all zeros.
    pub wraps: usize,
}
