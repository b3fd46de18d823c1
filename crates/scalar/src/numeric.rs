//! Numeric scalars (integer and float)
//!
//! Comparison and arithmetic shared by `Scalar<i64, F>` and `Scalar<f64, F>`.
//! Arithmetic never panics: integer overflow and division by zero of either
//! kind are returned as errors.

use std::fmt;

use datakind_error::{DataError, Result};

use crate::format::NumberFormatter;
use crate::scalar::{Flavor, Immutable, Mutable, Scalar};

mod sealed {
    pub trait Sealed {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
}

/// Native number kinds a numeric scalar can hold.
pub trait Number: sealed::Sealed + Copy + PartialOrd + fmt::Display {
    /// Kind name used in error messages
    const KIND: &'static str;

    fn checked_add(self, rhs: Self) -> Result<Self>;
    fn checked_sub(self, rhs: Self) -> Result<Self>;
    fn checked_mul(self, rhs: Self) -> Result<Self>;
    fn checked_div(self, rhs: Self) -> Result<Self>;
    fn is_negative(self) -> bool;
    fn format_with(self, formatter: &dyn NumberFormatter) -> String;
}

impl Number for i64 {
    const KIND: &'static str = "integer";

    fn checked_add(self, rhs: Self) -> Result<Self> {
        i64::checked_add(self, rhs).ok_or_else(|| DataError::overflow("add", self))
    }

    fn checked_sub(self, rhs: Self) -> Result<Self> {
        i64::checked_sub(self, rhs).ok_or_else(|| DataError::overflow("subtract", self))
    }

    fn checked_mul(self, rhs: Self) -> Result<Self> {
        i64::checked_mul(self, rhs).ok_or_else(|| DataError::overflow("multiply", self))
    }

    fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs == 0 {
            return Err(DataError::division_by_zero(self));
        }
        // only i64::MIN / -1 remains
        i64::checked_div(self, rhs).ok_or_else(|| DataError::overflow("divide", self))
    }

    fn is_negative(self) -> bool {
        self < 0
    }

    fn format_with(self, formatter: &dyn NumberFormatter) -> String {
        formatter.format_integer(self)
    }
}

impl Number for f64 {
    const KIND: &'static str = "float";

    fn checked_add(self, rhs: Self) -> Result<Self> {
        Ok(self + rhs)
    }

    fn checked_sub(self, rhs: Self) -> Result<Self> {
        Ok(self - rhs)
    }

    fn checked_mul(self, rhs: Self) -> Result<Self> {
        Ok(self * rhs)
    }

    fn checked_div(self, rhs: Self) -> Result<Self> {
        if rhs == 0.0 {
            return Err(DataError::division_by_zero(self));
        }
        Ok(self / rhs)
    }

    fn is_negative(self) -> bool {
        self < 0.0
    }

    fn format_with(self, formatter: &dyn NumberFormatter) -> String {
        formatter.format_float(self)
    }
}

impl<N: Number, F: Flavor> Scalar<N, F> {
    #[inline]
    pub fn value(&self) -> N {
        self.value
    }

    /// Compare against a raw number or another wrapper of the same kind
    pub fn is_bigger(&self, other: impl Into<N>) -> bool {
        self.value > other.into()
    }

    pub fn is_smaller(&self, other: impl Into<N>) -> bool {
        self.value < other.into()
    }

    pub fn equals(&self, other: impl Into<N>) -> bool {
        self.value == other.into()
    }

    pub fn is_negative(&self) -> bool {
        self.value.is_negative()
    }

    /// Render through an injected formatter
    pub fn format(&self, formatter: &dyn NumberFormatter) -> String {
        self.value.format_with(formatter)
    }
}

impl<F: Flavor> From<&Scalar<i64, F>> for i64 {
    fn from(value: &Scalar<i64, F>) -> Self {
        value.value
    }
}

impl<F: Flavor> From<&Scalar<f64, F>> for f64 {
    fn from(value: &Scalar<f64, F>) -> Self {
        value.value
    }
}

/// Arithmetic over a numeric scalar.
///
/// Implemented for `&ImmutableInteger`/`&ImmutableFloat` (new wrapper) and
/// `&mut MutableInteger`/`&mut MutableFloat` (in place, same handle).
pub trait NumericTransform: Sized {
    type Number: Number;
    type Output;

    /// Apply a fallible number function; on failure nothing changes
    fn try_map_number(
        self,
        f: impl FnOnce(Self::Number) -> Result<Self::Number>,
    ) -> Result<Self::Output>;

    fn add(self, other: impl Into<Self::Number>) -> Result<Self::Output> {
        let rhs = other.into();
        self.try_map_number(|n| n.checked_add(rhs))
    }

    fn subtract(self, other: impl Into<Self::Number>) -> Result<Self::Output> {
        let rhs = other.into();
        self.try_map_number(|n| n.checked_sub(rhs))
    }

    fn multiply(self, other: impl Into<Self::Number>) -> Result<Self::Output> {
        let rhs = other.into();
        self.try_map_number(|n| n.checked_mul(rhs))
    }

    /// Fails with `DivisionByZero` for a zero divisor of either kind
    fn divide(self, other: impl Into<Self::Number>) -> Result<Self::Output> {
        let rhs = other.into();
        self.try_map_number(|n| n.checked_div(rhs))
    }
}

impl<N: Number> NumericTransform for &Scalar<N, Immutable> {
    type Number = N;
    type Output = Scalar<N, Immutable>;

    fn try_map_number(self, f: impl FnOnce(N) -> Result<N>) -> Result<Self::Output> {
        f(self.value).map(Scalar::new)
    }
}

impl<'a, N: Number> NumericTransform for &'a mut Scalar<N, Mutable> {
    type Number = N;
    type Output = &'a mut Scalar<N, Mutable>;

    fn try_map_number(self, f: impl FnOnce(N) -> Result<N>) -> Result<Self::Output> {
        self.value = f(self.value)?;
        Ok(self)
    }
}
