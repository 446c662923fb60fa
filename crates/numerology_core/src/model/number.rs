//! Reduced numerology value.
//!
//! # Responsibility
//! - Carry the result of every digit reduction as a typed value.
//! - Reject out-of-range values when decoding external payloads.
//!
//! # Invariants
//! - Inner value is always in `{0..=9, 11, 22, 33}`.
//! - `0` only appears for names that contribute no mapped letters.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Master numbers kept intact by reduction when preservation is enabled.
pub const MASTER_NUMBERS: [u32; 3] = [11, 22, 33];

/// Result of digit reduction.
///
/// Serialized as a bare integer so renderers see `3`, not `{ "value": 3 }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct NumerologyNumber(u32);

impl NumerologyNumber {
    /// Wraps a value already produced by the reducer.
    pub(crate) const fn from_reduced(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw integer value.
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Returns whether this is one of 11, 22 or 33.
    pub fn is_master(self) -> bool {
        MASTER_NUMBERS.contains(&self.0)
    }

    /// Returns whether this value is in the canonical `{1..9, 11, 22, 33}` range.
    ///
    /// Only the degenerate empty-name result `0` is non-canonical.
    pub fn is_canonical(self) -> bool {
        (1..=9).contains(&self.0) || self.is_master()
    }
}

impl Display for NumerologyNumber {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<NumerologyNumber> for u32 {
    fn from(value: NumerologyNumber) -> Self {
        value.0
    }
}

impl TryFrom<u32> for NumerologyNumber {
    type Error = NumberError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        if value <= 9 || MASTER_NUMBERS.contains(&value) {
            Ok(Self(value))
        } else {
            Err(NumberError::OutOfRange(value))
        }
    }
}

/// Decoding error for values that reduction can never produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberError {
    OutOfRange(u32),
}

impl Display for NumberError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(value) => write!(
                f,
                "numerology number {value} is out of range (expected 0-9, 11, 22 or 33)"
            ),
        }
    }
}

impl Error for NumberError {}

#[cfg(test)]
mod tests {
    use super::{NumberError, NumerologyNumber};

    #[test]
    fn try_from_accepts_digits_and_masters() {
        for value in [0, 1, 5, 9, 11, 22, 33] {
            assert_eq!(NumerologyNumber::try_from(value).unwrap().value(), value);
        }
    }

    #[test]
    fn try_from_rejects_unreduced_values() {
        for value in [10, 12, 21, 44] {
            assert_eq!(
                NumerologyNumber::try_from(value),
                Err(NumberError::OutOfRange(value))
            );
        }
    }

    #[test]
    fn zero_is_not_canonical() {
        assert!(!NumerologyNumber::from_reduced(0).is_canonical());
        assert!(NumerologyNumber::from_reduced(22).is_canonical());
        assert!(NumerologyNumber::from_reduced(22).is_master());
        assert!(!NumerologyNumber::from_reduced(7).is_master());
    }
}
