// src/cli/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};
use modulo_counter_shared_kernel::Base;

use super::value_enum::{CliIncrementMode, CliOutputFormat};

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "modulo_counter",
    version = crate::VERSION,
    about = "Multi-digit modulo-N counter with ripple carry (binary, octal, decimal, hexadecimal)"
)]
pub struct Args {
    /// Number of digits (1 to 4096). Asked for interactively when omitted.
    #[arg(short, long, help_heading = "Counter")]
    pub digits: Option<usize>,

    /// Counter base: 2, 8, 10, 16 (or bin, oct, dec, hex). Asked for interactively when omitted.
    #[arg(short, long, help_heading = "Counter")]
    pub base: Option<Base>,

    /// Number of states to print [default: 20]
    #[arg(short = 'n', long, help_heading = "Counter")]
    pub iterations: Option<usize>,

    /// Increment flavour used between states [default: prefix]
    #[arg(long, value_enum, help_heading = "Counter")]
    pub mode: Option<CliIncrementMode>,

    /// Output format [default: text]. json and yaml keep every frame in memory until the run ends; use jsonl for long runs
    #[arg(long, value_enum, help_heading = "Output")]
    pub format: Option<CliOutputFormat>,

    /// Write output to a file instead of stdout
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Output")]
    pub output: Option<PathBuf>,

    /// Settings file (.json, .yaml or .yml) supplying defaults for the flags above
    #[arg(short, long, value_hint = ValueHint::FilePath, help_heading = "Behavior")]
    pub config: Option<PathBuf>,

    /// Fail instead of prompting when digits or base are missing
    #[arg(long, help_heading = "Behavior")]
    pub no_prompt: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Behavior")]
    pub verbose: u8,
}
