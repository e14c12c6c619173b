// crates/domain/src/digit.rs
use std::fmt;

use modulo_counter_shared_kernel::{Base, DomainError, DomainResult};

/// Label reported by a digit whose base is not one of the supported four.
pub const INVALID_NAME: &str = "Invalid";

/// Value marker rendered by a digit whose base is not one of the supported four.
pub const INVALID_VALUE: &str = "invalid";

/// A single self-wrapping positional digit.
///
/// The digit counts `0..=max_value` and wraps back to zero on the next
/// increment. A digit built through [`Digit::from_radix`] with an unsupported
/// radix has `max_value == 0`: it is permanently zero and renders as
/// [`INVALID_VALUE`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digit {
    value: u8,
    max_value: u8,
}

impl Digit {
    #[must_use]
    pub const fn new(base: Base) -> Self {
        Self { value: 0, max_value: base.max_value() }
    }

    /// Builds a digit from a raw radix without validating it.
    ///
    /// Radixes other than 2, 8, 10 and 16 produce the degenerate invalid digit.
    #[must_use]
    pub fn from_radix(radix: u32) -> Self {
        let max_value = Base::try_from(radix).map_or(0, Base::max_value);
        Self { value: 0, max_value }
    }

    /// # Errors
    ///
    /// Returns [`DomainError::ValueOutOfRange`] when `value` exceeds the base's maximum.
    pub fn with_value(base: Base, value: u8) -> DomainResult<Self> {
        let max_value = base.max_value();
        if value > max_value {
            return Err(DomainError::ValueOutOfRange { value, max: max_value });
        }
        Ok(Self { value, max_value })
    }

    #[inline]
    pub const fn value(self) -> u8 {
        self.value
    }

    #[inline]
    pub const fn max_value(self) -> u8 {
        self.max_value
    }

    /// `None` for the degenerate invalid digit.
    #[inline]
    pub const fn base(self) -> Option<Base> {
        Base::from_max_value(self.max_value)
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.base().is_some()
    }

    /// Advances by one, wrapping to zero after `max_value`.
    #[inline]
    pub fn increment(&mut self) {
        self.value = (self.value + 1) % (self.max_value + 1);
    }

    /// Prefix increment: advance, then return the new state.
    pub fn increment_and_get(&mut self) -> Self {
        self.increment();
        *self
    }

    /// Postfix increment: return the state as it was before advancing.
    pub fn get_and_increment(&mut self) -> Self {
        let snapshot = *self;
        self.increment();
        snapshot
    }

    /// Human-readable name of the digit's base.
    #[must_use]
    pub const fn render_name(self) -> &'static str {
        match self.base() {
            Some(base) => base.name(),
            None => INVALID_NAME,
        }
    }

    #[must_use]
    pub fn render_value(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.base() {
            Some(Base::Binary | Base::Decimal) => write!(f, "{}", self.value),
            Some(Base::Octal) => write!(f, "{:o}", self.value),
            Some(Base::Hexadecimal) => write!(f, "{:X}", self.value),
            None => f.write_str(INVALID_VALUE),
        }
    }
}
