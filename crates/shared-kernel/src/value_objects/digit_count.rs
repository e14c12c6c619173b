// crates/shared-kernel/src/value_objects/digit_count.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Number of digits in a counter, between one and [`DigitCount::MAX`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct DigitCount(usize);

impl DigitCount {
    pub const ONE: Self = Self(1);
    pub const MAX: Self = Self(4096);

    /// # Errors
    ///
    /// Returns [`DomainError::InvalidLength`] when `value` is zero or above [`Self::MAX`].
    pub fn new(value: usize) -> DomainResult<Self> {
        if value == 0 || value > Self::MAX.0 {
            return Err(DomainError::InvalidLength { length: value });
        }
        Ok(Self(value))
    }

    #[inline]
    pub const fn value(self) -> usize {
        self.0
    }

    #[inline]
    pub const fn is_single(self) -> bool {
        self.0 == 1
    }
}

impl TryFrom<usize> for DigitCount {
    type Error = DomainError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DigitCount> for usize {
    fn from(count: DigitCount) -> Self {
        count.0
    }
}

impl fmt::Display for DigitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
