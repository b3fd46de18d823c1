//! Strict positive integer
//!
//! Readonly integer that can only hold values greater than zero. Used for
//! entity ids, list capacities and page counters.

use std::fmt;
use std::num::NonZeroU64;

use datakind_error::{DataError, Result};
use serde::{Deserialize, Serialize};

/// Integer guaranteed to be `>= 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct PositiveInteger(NonZeroU64);

impl PositiveInteger {
    /// Fails with `NonPositiveInteger` for zero or negative input
    pub fn new(value: i64) -> Result<Self> {
        Self::named("value", value)
    }

    /// Like [`new`](Self::new) but names the argument in the error
    pub fn named(argument: &str, value: i64) -> Result<Self> {
        u64::try_from(value)
            .ok()
            .and_then(NonZeroU64::new)
            .map(Self)
            .ok_or_else(|| DataError::non_positive_integer(argument, value))
    }

    pub const ONE: Self = Self(NonZeroU64::MIN);

    #[inline]
    pub fn get(self) -> i64 {
        self.0.get() as i64
    }

    #[inline]
    pub fn as_usize(self) -> usize {
        self.0.get() as usize
    }
}

impl TryFrom<i64> for PositiveInteger {
    type Error = DataError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<PositiveInteger> for i64 {
    fn from(value: PositiveInteger) -> Self {
        value.get()
    }
}

impl fmt::Display for PositiveInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
