// crates/usecase/src/orchestrator.rs
use modulo_counter_domain::{Counter, Digit, IncrementMode, Tally};
use modulo_counter_ports::{Frame, FrameSink, RunHeader, RunSummary};
use modulo_counter_shared_kernel::{Base, DigitCount, Result};

use crate::dto::RunPlan;

pub struct RunCounter<'a> {
    sink: &'a mut dyn FrameSink,
}

impl<'a> RunCounter<'a> {
    pub fn new(sink: &'a mut dyn FrameSink) -> Self {
        Self { sink }
    }

    /// Starts from zero: a lone [`Digit`] for one digit, a [`Counter`] otherwise.
    ///
    /// # Errors
    ///
    /// Propagates any error reported by the sink.
    pub fn run_fresh(&mut self, digits: DigitCount, base: Base, plan: &RunPlan) -> Result<RunSummary> {
        if digits.is_single() {
            let mut digit = Digit::new(base);
            self.run(&mut digit, plan)
        } else {
            let mut counter = Counter::new(digits, base);
            self.run(&mut counter, plan)
        }
    }

    /// Emits the label once, then `plan.iterations` frames, stepping after each.
    pub fn run<T: Tally>(&mut self, tally: &mut T, plan: &RunPlan) -> Result<RunSummary> {
        let header = RunHeader {
            label: tally.label().to_string(),
            radix: tally.base().map(Base::radix),
            digits: tally.width(),
            iterations: plan.iterations,
            mode: plan.mode,
        };
        log::info!(
            "running {} counter: {} digit(s), {} iteration(s), {} increment",
            header.label,
            header.digits,
            header.iterations,
            header.mode
        );
        self.sink.begin(&header)?;

        let mut wraps = 0;
        for index in 0..plan.iterations {
            let was_zero = tally.is_zero();
            let frame = match plan.mode {
                IncrementMode::Prefix => {
                    let frame = capture(index, tally);
                    tally.step_and_get();
                    frame
                }
                IncrementMode::Postfix => {
                    let snapshot = tally.get_and_step();
                    capture(index, &snapshot)
                }
            };
            // A counter from an unsupported radix never leaves zero.
            if !was_zero && tally.is_zero() {
                wraps += 1;
                log::debug!("rolled over to zero after frame {index}");
            }

            log::trace!("frame {index}: {}", frame.text);
            self.sink.frame(&frame)?;
        }

        let summary = RunSummary { frames: plan.iterations, final_values: tally.values(), wraps };
        self.sink.finish(&summary)?;
        Ok(summary)
    }
}

fn capture<T: Tally>(index: usize, tally: &T) -> Frame {
    Frame { index, values: tally.values(), text: tally.render_snapshot() }
}
