//! Boolean scalar

use crate::scalar::{Flavor, Immutable, Mutable, Scalar};

const TRUTHY: [&str; 3] = ["1", "true", "yes"];

impl<F: Flavor> Scalar<bool, F> {
    pub fn from_boolean(value: bool) -> Self {
        Self::new(value)
    }

    /// `"1"`, `"true"` and `"yes"` (trimmed, any case) are true; anything else is false
    pub fn from_string(value: impl AsRef<str>) -> Self {
        let value = value.as_ref().trim();
        Self::new(TRUTHY.iter().any(|t| t.eq_ignore_ascii_case(value)))
    }

    /// True when greater than zero
    pub fn from_integer(value: i64) -> Self {
        Self::new(value > 0)
    }

    /// True when greater than zero
    pub fn from_float(value: f64) -> Self {
        Self::new(value > 0.0)
    }

    #[inline]
    pub fn value(&self) -> bool {
        self.value
    }

    pub fn is_true(&self) -> bool {
        self.value
    }

    pub fn is_false(&self) -> bool {
        !self.value
    }

    /// Compare with another boolean wrapper of any flavor
    pub fn equals<G: Flavor>(&self, other: &Scalar<bool, G>) -> bool {
        self.value == other.value
    }

    /// Compare with a native bool
    pub fn equals_native(&self, other: bool) -> bool {
        self.value == other
    }

    /// `"true"` or `"false"`
    pub fn to_text(&self) -> Scalar<String, F> {
        Scalar::new(self.value.to_string())
    }

    pub fn to_integer(&self) -> Scalar<i64, F> {
        Scalar::new(i64::from(self.value))
    }

    pub fn to_float(&self) -> Scalar<f64, F> {
        Scalar::new(if self.value { 1.0 } else { 0.0 })
    }
}

impl<F: Flavor> From<bool> for Scalar<bool, F> {
    fn from(value: bool) -> Self {
        Self::new(value)
    }
}

impl<F: Flavor> From<&Scalar<bool, F>> for bool {
    fn from(value: &Scalar<bool, F>) -> Self {
        value.value
    }
}

/// Logic over a boolean scalar: new wrapper for `&ImmutableBoolean`,
/// in place for `&mut MutableBoolean`.
pub trait BooleanTransform: Sized {
    type Output;

    fn map_bool(self, f: impl FnOnce(bool) -> bool) -> Self::Output;

    fn negate(self) -> Self::Output {
        self.map_bool(|b| !b)
    }

    fn and(self, other: impl Into<bool>) -> Self::Output {
        let other = other.into();
        self.map_bool(|b| b && other)
    }

    fn or(self, other: impl Into<bool>) -> Self::Output {
        let other = other.into();
        self.map_bool(|b| b || other)
    }
}

impl BooleanTransform for &Scalar<bool, Immutable> {
    type Output = Scalar<bool, Immutable>;

    fn map_bool(self, f: impl FnOnce(bool) -> bool) -> Self::Output {
        Scalar::new(f(self.value))
    }
}

impl<'a> BooleanTransform for &'a mut Scalar<bool, Mutable> {
    type Output = &'a mut Scalar<bool, Mutable>;

    fn map_bool(self, f: impl FnOnce(bool) -> bool) -> Self::Output {
        self.value = f(self.value);
        self
    }
}
