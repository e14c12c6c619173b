// crates/shared-kernel/src/value_objects/base.rs
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Numeric base shared by every digit of a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Base {
    Binary,
    Octal,
    Decimal,
    Hexadecimal,
}

impl Base {
    pub const ALL: [Self; 4] = [Self::Binary, Self::Octal, Self::Decimal, Self::Hexadecimal];

    #[inline]
    pub const fn radix(self) -> u32 {
        match self {
            Self::Binary => 2,
            Self::Octal => 8,
            Self::Decimal => 10,
            Self::Hexadecimal => 16,
        }
    }

    /// Largest value a digit in this base can hold (`radix - 1`).
    #[inline]
    pub const fn max_value(self) -> u8 {
        match self {
            Self::Binary => 1,
            Self::Octal => 7,
            Self::Decimal => 9,
            Self::Hexadecimal => 15,
        }
    }

    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Binary => "Binary",
            Self::Octal => "Octal",
            Self::Decimal => "Decimal",
            Self::Hexadecimal => "Hexadecimal",
        }
    }

    /// Inverse of [`Base::max_value`].
    pub const fn from_max_value(max_value: u8) -> Option<Self> {
        match max_value {
            1 => Some(Self::Binary),
            7 => Some(Self::Octal),
            9 => Some(Self::Decimal),
            15 => Some(Self::Hexadecimal),
            _ => None,
        }
    }
}

impl TryFrom<u32> for Base {
    type Error = DomainError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        match radix {
            2 => Ok(Self::Binary),
            8 => Ok(Self::Octal),
            10 => Ok(Self::Decimal),
            16 => Ok(Self::Hexadecimal),
            _ => Err(DomainError::UnsupportedBase { radix }),
        }
    }
}

impl From<Base> for u32 {
    fn from(base: Base) -> Self {
        base.radix()
    }
}

impl FromStr for Base {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if let Ok(radix) = key.parse::<u32>() {
            return Self::try_from(radix).map_err(|e| e.to_string());
        }
        match key.to_ascii_lowercase().as_str() {
            "bin" | "binary" => Ok(Self::Binary),
            "oct" | "octal" => Ok(Self::Octal),
            "dec" | "decimal" => Ok(Self::Decimal),
            "hex" | "hexadecimal" => Ok(Self::Hexadecimal),
            other => Err(format!("Unknown base: {other}")),
        }
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
