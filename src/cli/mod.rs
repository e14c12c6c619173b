mod args;
pub mod prompt;
mod value_enum;

pub use args::Args;
use std::io::{BufRead, Write};

use modulo_counter_domain::{IncrementMode, OutputFormat};
use modulo_counter_infra::{Settings, load_settings};
use modulo_counter_shared_kernel::{DigitCount, DomainError, PresentationError, Result};
use modulo_counter_usecase::dto::DEFAULT_ITERATIONS;

use crate::config::{Config, ConfigBuilder};
use prompt::Prompter;

fn validate_at_least_one(flag: &str, value: Option<usize>) -> Result<()> {
    if value == Some(0) {
        return Err(PresentationError::InvalidValue {
            flag: flag.to_string(),
            value: "0".to_string(),
            reason: "must be at least 1".to_string(),
        }
        .into());
    }
    Ok(())
}

fn missing(name: &str) -> PresentationError {
    PresentationError::MissingParameter { name: name.to_string() }
}

/// Resolve a [`Config`] from flags, then the settings file, then prompts or defaults.
///
/// # Errors
///
/// Returns `Err` when a flag is out of range, the settings file cannot be
/// loaded, prompting is disabled while a parameter is missing, or the prompt
/// input ends before a valid answer.
pub fn build_config<R: BufRead, W: Write>(args: &Args, input: R, prompts: W) -> Result<Config> {
    validate_at_least_one("--digits", args.digits)?;
    validate_at_least_one("--iterations", args.iterations)?;

    let settings = match &args.config {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };
    if settings.iterations == Some(0) {
        return Err(DomainError::InvalidConfiguration { reason: "iterations must be at least 1".to_string() }.into());
    }

    let mut prompter = Prompter::new(input, prompts);

    let digits = match args.digits.map(DigitCount::new).transpose()?.or(settings.digits) {
        Some(digits) => digits,
        None if args.no_prompt => return Err(missing("digits").into()),
        None => prompter.digits()?,
    };
    let base = match args.base.or(settings.base) {
        Some(base) => base,
        None if args.no_prompt => return Err(missing("base").into()),
        None => prompter.base()?,
    };

    let mode = args.mode.map(IncrementMode::from).or(settings.mode).unwrap_or_default();
    let format = args.format.map(OutputFormat::from).or(settings.format).unwrap_or_default();
    let iterations = args.iterations.or(settings.iterations).unwrap_or(DEFAULT_ITERATIONS);

    let config = ConfigBuilder::default()
        .digits(digits)
        .base(base)
        .iterations(iterations)
        .mode(mode)
        .format(format)
        .output(args.output.clone())
        .build()
        .map_err(|e| DomainError::InvalidConfiguration { reason: e.to_string() })?;
    log::debug!("resolved configuration: {config:?}");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::{fs, io::Cursor};

    use clap::Parser;

    use modulo_counter_shared_kernel::{Base, CounterError};

    use super::*;

    fn resolve(argv: &[&str], stdin: &str) -> Result<Config> {
        let args = Args::parse_from(std::iter::once("modulo_counter").chain(argv.iter().copied()));
        build_config(&args, Cursor::new(stdin.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn flags_are_enough() {
        let config = resolve(&["-d", "3", "-b", "hex", "-n", "40", "--mode", "postfix"], "").unwrap();
        assert_eq!(config.digits.value(), 3);
        assert_eq!(config.base, Base::Hexadecimal);
        assert_eq!(config.iterations, 40);
        assert_eq!(config.mode, IncrementMode::Postfix);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn missing_parameters_are_prompted_for() {
        let config = resolve(&["--base", "8"], "0\n2\n").unwrap();
        assert_eq!(config.digits.value(), 2);
        assert_eq!(config.base, Base::Octal);
        assert_eq!(config.iterations, 20);
    }

    #[test]
    fn no_prompt_reports_missing_parameter() {
        let err = resolve(&["--digits", "2", "--no-prompt"], "16\n").expect_err("base missing");
        assert!(matches!(
            err,
            CounterError::Presentation(PresentationError::MissingParameter { ref name }) if name == "base"
        ));
    }

    #[test]
    fn zero_digits_flag_is_rejected() {
        let err = resolve(&["--digits", "0", "--base", "2"], "").expect_err("zero digits");
        assert!(err.to_string().contains("--digits"));
    }

    #[test]
    fn zero_iterations_flag_is_rejected() {
        let err = resolve(&["-d", "1", "-b", "2", "-n", "0"], "").expect_err("zero iterations");
        assert!(err.to_string().contains("must be at least 1"));
    }

    #[test]
    fn unsupported_base_flag_fails_to_parse() {
        let result = Args::try_parse_from(["modulo_counter", "--base", "7"]);
        assert!(result.is_err());
    }

    #[test]
    fn flags_override_settings_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.yaml");
        fs::write(&path, "digits: 4\nbase: 2\niterations: 5\nformat: json\n").unwrap();
        let path = path.to_str().unwrap();

        let config = resolve(&["--config", path, "--base", "10"], "").unwrap();
        assert_eq!(config.digits.value(), 4);
        assert_eq!(config.base, Base::Decimal);
        assert_eq!(config.iterations, 5);
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn zero_iterations_in_settings_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("counter.json");
        fs::write(&path, r#"{"iterations": 0}"#).unwrap();

        let err = resolve(&["-c", path.to_str().unwrap(), "-d", "1", "-b", "2"], "").expect_err("zero iterations");
        assert!(err.to_string().contains("iterations must be at least 1"));
    }
}
