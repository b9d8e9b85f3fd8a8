//! Checked wide-integer arithmetic.
//!
//! Every value in the search (the modulus `N = base^m`, offsets, candidate
//! `x` values and the intermediate products of the bound inequality) is a
//! non-negative integer held in a [`Wide`]. All operations are checked:
//! exceeding the 128-bit range is reported as an [`ArithmeticError`]
//! instead of wrapping.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Failure of a checked [`Wide`] operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("{op} overflowed")]
    Overflow { op: &'static str },

    #[error("{op} underflowed")]
    Underflow { op: &'static str },

    #[error("division by zero")]
    DivisionByZero,
}

/// Unsigned 128-bit integer with checked operations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Wide(u128);

impl Wide {
    pub const ZERO: Wide = Wide(0);
    pub const ONE: Wide = Wide(1);
    pub const TWO: Wide = Wide(2);
    pub const MAX: Wide = Wide(u128::MAX);

    pub const fn new(value: u128) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u128 {
        self.0
    }

    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Wide) -> Result<Wide, ArithmeticError> {
        self.0
            .checked_add(rhs.0)
            .map(Wide)
            .ok_or(ArithmeticError::Overflow { op: "addition" })
    }

    pub fn checked_sub(self, rhs: Wide) -> Result<Wide, ArithmeticError> {
        self.0
            .checked_sub(rhs.0)
            .map(Wide)
            .ok_or(ArithmeticError::Underflow { op: "subtraction" })
    }

    pub fn checked_mul(self, rhs: Wide) -> Result<Wide, ArithmeticError> {
        self.0
            .checked_mul(rhs.0)
            .map(Wide)
            .ok_or(ArithmeticError::Overflow {
                op: "multiplication",
            })
    }

    /// Truncating division
    pub fn checked_div(self, rhs: Wide) -> Result<Wide, ArithmeticError> {
        self.0
            .checked_div(rhs.0)
            .map(Wide)
            .ok_or(ArithmeticError::DivisionByZero)
    }

    pub fn checked_rem(self, rhs: Wide) -> Result<Wide, ArithmeticError> {
        self.0
            .checked_rem(rhs.0)
            .map(Wide)
            .ok_or(ArithmeticError::DivisionByZero)
    }
}

impl From<u32> for Wide {
    fn from(value: u32) -> Self {
        Self(value as u128)
    }
}

impl From<u64> for Wide {
    fn from(value: u64) -> Self {
        Self(value as u128)
    }
}

impl From<u128> for Wide {
    fn from(value: u128) -> Self {
        Self(value)
    }
}

impl From<Wide> for u128 {
    fn from(value: Wide) -> Self {
        value.0
    }
}

impl fmt::Display for Wide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Parses a decimal value
impl FromStr for Wide {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u128>().map(Wide)
    }
}

/// Serialized as a decimal string; JSON numbers cannot carry 128 bits.
impl Serialize for Wide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

/// Compute `base^exponent` by repeated squaring.
///
/// The running square is only formed while exponent bits remain, so an
/// overflow is reported only when the result itself does not fit.
pub fn power(base: Wide, exponent: u32) -> Result<Wide, ArithmeticError> {
    let mut result = Wide::ONE;
    let mut base = base;
    let mut exp = exponent;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.checked_mul(base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = base.checked_mul(base)?;
        }
    }

    Ok(result)
}
