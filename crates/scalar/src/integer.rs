//! Integer scalar: constructors and cross-kind conversions.

use datakind_error::{DataError, Result};

use crate::scalar::{Flavor, Scalar};

impl<F: Flavor> Scalar<i64, F> {
    pub fn from_integer(value: i64) -> Self {
        Self::new(value)
    }

    /// Parse trimmed text
    pub fn from_string(value: &str) -> Result<Self> {
        value
            .trim()
            .parse()
            .map(Self::new)
            .map_err(|_| DataError::invalid_number(value, "integer"))
    }

    /// Truncates toward zero; saturates at the i64 bounds, NaN becomes 0
    pub fn from_float(value: f64) -> Self {
        Self::new(value as i64)
    }

    pub fn from_boolean(value: bool) -> Self {
        Self::new(i64::from(value))
    }

    pub fn to_text(&self) -> Scalar<String, F> {
        Scalar::new(self.value.to_string())
    }

    pub fn to_float(&self) -> Scalar<f64, F> {
        Scalar::new(self.value as f64)
    }

    /// True when the value is greater than zero
    pub fn to_boolean(&self) -> Scalar<bool, F> {
        Scalar::new(self.value > 0)
    }
}

impl<F: Flavor> From<i64> for Scalar<i64, F> {
    fn from(value: i64) -> Self {
        Self::new(value)
    }
}

impl<F: Flavor> From<i32> for Scalar<i64, F> {
    fn from(value: i32) -> Self {
        Self::new(i64::from(value))
    }
}
