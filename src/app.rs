use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use modulo_counter_infra::{persistence::FileWriter, sink_for};
use modulo_counter_ports::RunSummary;
use modulo_counter_usecase::RunCounter;

use crate::{cli, config::Config, logging};

pub fn run() -> Result<()> {
    let args = cli::Args::parse();
    logging::init(args.verbose);

    let config = cli::build_config(&args, io::stdin().lock(), io::stderr())
        .context("failed to resolve counter parameters")?;
    let summary = execute(&config)?;
    log::info!("done: {} frame(s), {} rollover(s)", summary.frames, summary.wraps);
    Ok(())
}

/// Runs the counter described by `config` and writes its frames to stdout or `config.output`.
pub fn execute(config: &Config) -> Result<RunSummary> {
    let summary = match &config.output {
        Some(path) => {
            let writer = FileWriter::create(path)?;
            emit(config, writer)
        }
        None => emit(config, io::stdout().lock()),
    };
    summary.context("failed to emit counter output")
}

fn emit<W: Write>(config: &Config, out: W) -> modulo_counter_shared_kernel::Result<RunSummary> {
    let mut sink = sink_for(config.format, out);
    RunCounter::new(sink.as_mut()).run_fresh(config.digits, config.base, &config.plan())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use modulo_counter_domain::{IncrementMode, OutputFormat};
    use modulo_counter_shared_kernel::{Base, DigitCount};

    use super::*;
    use crate::config::ConfigBuilder;

    #[test]
    fn execute_writes_text_to_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/run.txt");
        let config = ConfigBuilder::default()
            .digits(DigitCount::new(2).unwrap())
            .base(Base::Binary)
            .iterations(5usize)
            .mode(IncrementMode::Postfix)
            .output(Some(path.clone()))
            .build()
            .unwrap();

        let summary = execute(&config).expect("run succeeds");
        assert_eq!(summary.final_values, vec![0, 1]);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "Binary counter is generated:\n\nPostfix Increment for Multi-Digit Counter:\n00 01 10 11 00 \n"
        );
    }

    #[test]
    fn execute_writes_json_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.json");
        let config = ConfigBuilder::default()
            .digits(DigitCount::ONE)
            .base(Base::Decimal)
            .iterations(12usize)
            .format(OutputFormat::Json)
            .output(Some(path.clone()))
            .build()
            .unwrap();

        execute(&config).unwrap();
        let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["header"]["label"], "Decimal");
        assert_eq!(json["frames"][10]["text"], "0 ");
        assert_eq!(json["summary"]["wraps"], 1);
    }
}
