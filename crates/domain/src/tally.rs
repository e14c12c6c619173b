// crates/domain/src/tally.rs
use modulo_counter_shared_kernel::Base;

use crate::{counter::Counter, digit::Digit};

/// Delimits successive snapshots when they are printed one after another.
pub const SEPARATOR: &str = " ";

/// Anything that can be stepped and rendered like an odometer.
///
/// Implemented for a lone [`Digit`] (the one-digit case) and for [`Counter`].
pub trait Tally: Clone {
    /// Advances by one.
    fn step(&mut self);

    fn label(&self) -> &'static str;

    fn base(&self) -> Option<Base>;

    /// Number of positional digits.
    fn width(&self) -> usize;

    /// Digit values, most significant first.
    fn values(&self) -> Vec<u8>;

    /// On-screen text of the current state, terminated by [`SEPARATOR`].
    fn render_snapshot(&self) -> String;

    fn is_zero(&self) -> bool {
        self.values().iter().all(|&value| value == 0)
    }

    fn step_and_get(&mut self) -> &Self {
        self.step();
        self
    }

    fn get_and_step(&mut self) -> Self {
        let snapshot = self.clone();
        self.step();
        snapshot
    }
}

impl Tally for Digit {
    fn step(&mut self) {
        self.increment();
    }

    fn label(&self) -> &'static str {
        self.render_name()
    }

    fn base(&self) -> Option<Base> {
        Digit::base(*self)
    }

    fn width(&self) -> usize {
        1
    }

    fn values(&self) -> Vec<u8> {
        vec![self.value()]
    }

    fn render_snapshot(&self) -> String {
        format!("{self}{SEPARATOR}")
    }

    fn is_zero(&self) -> bool {
        self.value() == 0
    }
}

impl Tally for Counter {
    fn step(&mut self) {
        self.increment();
    }

    fn label(&self) -> &'static str {
        Counter::label(self)
    }

    fn base(&self) -> Option<Base> {
        Counter::base(self)
    }

    fn width(&self) -> usize {
        Counter::width(self)
    }

    fn values(&self) -> Vec<u8> {
        Counter::values(self)
    }

    fn render_snapshot(&self) -> String {
        self.render_values()
    }

    fn is_zero(&self) -> bool {
        Counter::is_zero(self)
    }
}

#[cfg(test)]
mod tests {
    use modulo_counter_shared_kernel::DigitCount;

    use super::*;

    fn drive<T: Tally>(tally: &mut T, steps: usize) -> Vec<String> {
        (0..steps)
            .map(|_| {
                let text = tally.render_snapshot();
                tally.step();
                text
            })
            .collect()
    }

    #[test]
    fn digit_and_one_digit_counter_render_alike() {
        let mut digit = Digit::new(Base::Hexadecimal);
        let mut counter = Counter::new(DigitCount::ONE, Base::Hexadecimal);
        assert_eq!(drive(&mut digit, 20), drive(&mut counter, 20));
    }

    #[test]
    fn digit_snapshot_has_trailing_separator() {
        let digit = Digit::with_value(Base::Binary, 1).unwrap();
        assert_eq!(digit.render_snapshot(), "1 ");
    }

    #[test]
    fn get_and_step_keeps_old_state() {
        let mut counter = Counter::with_length(2, Base::Decimal).unwrap();
        let before = Tally::get_and_step(&mut counter);
        assert_eq!(Tally::values(&before), vec![0, 0]);
        assert_eq!(Tally::values(&counter), vec![0, 1]);
        assert_eq!(Tally::values(counter.step_and_get()), vec![0, 2]);
    }
}
