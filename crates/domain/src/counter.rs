// crates/domain/src/counter.rs
use std::fmt;

use modulo_counter_shared_kernel::{Base, DigitCount, DomainResult};

use crate::digit::{Digit, INVALID_NAME};
use crate::tally::SEPARATOR;

/// Fixed-length odometer built from [`Digit`]s sharing one base.
///
/// Index 0 is the most significant digit, the last index the least
/// significant one. Increments ripple a carry from right to left; when every
/// digit wraps the counter rolls over to all zeros.
#[derive(Debug, Clone)]
pub struct Counter {
    digits: Vec<Digit>,
    label_shown: bool,
}

impl Counter {
    #[must_use]
    pub fn new(length: DigitCount, base: Base) -> Self {
        Self { digits: vec![Digit::new(base); length.value()], label_shown: false }
    }

    /// # Errors
    ///
    /// Returns [`InvalidLength`](modulo_counter_shared_kernel::DomainError::InvalidLength) when `length` is zero or above [`DigitCount::MAX`].
    pub fn with_length(length: usize, base: Base) -> DomainResult<Self> {
        Ok(Self::new(DigitCount::new(length)?, base))
    }

    /// Builds a counter from a raw radix without validating it.
    ///
    /// See [`Digit::from_radix`] for how unsupported radixes behave.
    #[must_use]
    pub fn from_radix(length: DigitCount, radix: u32) -> Self {
        Self { digits: vec![Digit::from_radix(radix); length.value()], label_shown: false }
    }

    /// Builds a counter holding `values`, most significant first.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidLength`](modulo_counter_shared_kernel::DomainError::InvalidLength) for an empty or oversized slice and
    /// [`ValueOutOfRange`](modulo_counter_shared_kernel::DomainError::ValueOutOfRange) when any value exceeds the base's maximum.
    pub fn from_values(base: Base, values: &[u8]) -> DomainResult<Self> {
        DigitCount::new(values.len())?;
        let digits = values
            .iter()
            .map(|&value| Digit::with_value(base, value))
            .collect::<DomainResult<Vec<_>>>()?;
        Ok(Self { digits, label_shown: false })
    }

    /// Number of digits.
    #[inline]
    pub fn width(&self) -> usize {
        self.digits.len()
    }

    /// `None` when the counter was built from an unsupported radix.
    pub fn base(&self) -> Option<Base> {
        self.digits.first().and_then(|digit| digit.base())
    }

    pub fn values(&self) -> Vec<u8> {
        self.digits.iter().map(|digit| digit.value()).collect()
    }

    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|digit| digit.value() == 0)
    }

    /// Ripple-carry increment starting at the least significant digit.
    pub fn increment(&mut self) {
        for digit in self.digits.iter_mut().rev() {
            digit.increment();
            if digit.value() != 0 {
                break;
            }
        }
    }

    /// Prefix increment: advance, then return the new state.
    pub fn increment_and_get(&mut self) -> &Self {
        self.increment();
        self
    }

    /// Postfix increment: return an independent copy of the state before advancing.
    pub fn get_and_increment(&mut self) -> Self {
        let snapshot = self.clone();
        self.increment();
        snapshot
    }

    /// Name of the counter's base, taken from the most significant digit.
    pub fn label(&self) -> &'static str {
        self.digits.first().map_or(INVALID_NAME, |digit| digit.render_name())
    }

    /// Returns the label the first time it is called, `None` afterwards.
    pub fn render_label(&mut self) -> Option<&'static str> {
        if self.label_shown || self.digits.is_empty() {
            return None;
        }
        self.label_shown = true;
        Some(self.label())
    }

    pub const fn label_shown(&self) -> bool {
        self.label_shown
    }

    /// All digits left to right followed by a single separator.
    pub fn render_values(&self) -> String {
        let mut out = self.to_string();
        out.push_str(SEPARATOR);
        out
    }
}

impl PartialEq for Counter {
    fn eq(&self, other: &Self) -> bool {
        self.digits == other.digits
    }
}

impl Eq for Counter {}

impl fmt::Display for Counter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{digit}")?;
        }
        Ok(())
    }
}
