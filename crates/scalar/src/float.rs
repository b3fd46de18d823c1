//! Float scalar: constructors and cross-kind conversions.

use datakind_error::{DataError, Result};

use crate::scalar::{Flavor, Scalar};

impl<F: Flavor> Scalar<f64, F> {
    pub fn from_float(value: f64) -> Self {
        Self::new(value)
    }

    /// Parse trimmed text
    pub fn from_string(value: &str) -> Result<Self> {
        value
            .trim()
            .parse()
            .map(Self::new)
            .map_err(|_| DataError::invalid_number(value, "float"))
    }

    pub fn from_integer(value: i64) -> Self {
        Self::new(value as f64)
    }

    pub fn from_boolean(value: bool) -> Self {
        Self::new(if value { 1.0 } else { 0.0 })
    }

    pub fn is_nan(&self) -> bool {
        self.value.is_nan()
    }

    pub fn to_text(&self) -> Scalar<String, F> {
        Scalar::new(self.value.to_string())
    }

    /// Truncates toward zero; saturates at the i64 bounds, NaN becomes 0
    pub fn to_integer(&self) -> Scalar<i64, F> {
        Scalar::new(self.value as i64)
    }

    /// True when the value is greater than zero
    pub fn to_boolean(&self) -> Scalar<bool, F> {
        Scalar::new(self.value > 0.0)
    }
}

impl<F: Flavor> From<f64> for Scalar<f64, F> {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}
