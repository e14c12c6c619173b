use clap::ValueEnum;
use modulo_counter_domain::{IncrementMode, OutputFormat};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliOutputFormat {
    /// Banner followed by every state on one line
    Text,
    /// One document, written once the run ends
    Json,
    /// One record per line, streamed as the run goes
    Jsonl,
    /// One document, written once the run ends
    Yaml,
}

impl From<CliOutputFormat> for OutputFormat {
    fn from(value: CliOutputFormat) -> Self {
        match value {
            CliOutputFormat::Text => OutputFormat::Text,
            CliOutputFormat::Json => OutputFormat::Json,
            CliOutputFormat::Jsonl => OutputFormat::Jsonl,
            CliOutputFormat::Yaml => OutputFormat::Yaml,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum CliIncrementMode {
    Prefix,
    Postfix,
}

impl From<CliIncrementMode> for IncrementMode {
    fn from(value: CliIncrementMode) -> Self {
        match value {
            CliIncrementMode::Prefix => IncrementMode::Prefix,
            CliIncrementMode::Postfix => IncrementMode::Postfix,
        }
    }
}
