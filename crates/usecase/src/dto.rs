// crates/usecase/src/dto.rs
use modulo_counter_domain::IncrementMode;

/// Iterations shown by the reference console program.
pub const DEFAULT_ITERATIONS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunPlan {
    pub iterations: usize,
    pub mode: IncrementMode,
}

impl Default for RunPlan {
    fn default() -> Self {
        Self { iterations: DEFAULT_ITERATIONS, mode: IncrementMode::Prefix }
    }
}
