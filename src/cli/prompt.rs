// src/cli/prompt.rs
//! Interactive fallback for parameters not given on the command line.

use std::io::{BufRead, Write};

use modulo_counter_shared_kernel::{Base, DigitCount, PresentationError, Result};

pub const INTRO: &str = "Please enter the parameters of your counter:";

const DIGITS_PROMPT: &str = "Number of digits: ";
const DIGITS_RETRY: &str = "Please enter a valid number of digits: ";
const BASE_PROMPT: &str = "Enter the counter base (2/8/10/16): ";
const BASE_RETRY: &str = "Please enter a valid base (2, 8, 10, 16): ";

/// Asks on `output`, reads answers from `input`, and re-asks until an answer is valid.
pub struct Prompter<R, W> {
    input: R,
    output: W,
    introduced: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, introduced: false }
    }

    pub fn digits(&mut self) -> Result<DigitCount> {
        self.ask(DIGITS_PROMPT, DIGITS_RETRY, |answer| {
            answer.parse::<usize>().ok().and_then(|n| DigitCount::new(n).ok())
        })
    }

    pub fn base(&mut self) -> Result<Base> {
        self.ask(BASE_PROMPT, BASE_RETRY, |answer| answer.parse::<Base>().ok())
    }

    fn ask<T>(&mut self, prompt: &str, retry: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T> {
        if !self.introduced {
            writeln!(self.output, "{INTRO}")?;
            self.introduced = true;
        }

        let mut current = prompt;
        loop {
            write!(self.output, "{current}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Err(PresentationError::InputClosed { prompt: prompt.trim_end().to_string() }.into());
            }
            let answer = line.trim();
            if let Some(value) = parse(answer) {
                return Ok(value);
            }
            log::debug!("rejected answer {answer:?}");
            current = retry;
        }
    }
}
