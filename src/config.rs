// src/config.rs
use std::path::PathBuf;

use derive_builder::Builder;
use modulo_counter_domain::{IncrementMode, OutputFormat};
use modulo_counter_shared_kernel::{Base, DigitCount};
use modulo_counter_usecase::{RunPlan, dto::DEFAULT_ITERATIONS};

/// Fully resolved run configuration.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub digits: DigitCount,
    pub base: Base,
    #[builder(default = "DEFAULT_ITERATIONS")]
    pub iterations: usize,
    #[builder(default)]
    pub mode: IncrementMode,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub output: Option<PathBuf>,
}

impl Config {
    pub const fn plan(&self) -> RunPlan {
        RunPlan { iterations: self.iterations, mode: self.mode }
    }
}
