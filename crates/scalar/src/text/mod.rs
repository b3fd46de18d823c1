//! Text scalar
//!
//! Read operations available to every flavor of [`Scalar<String, F>`].
//! Transformations live in [`TextTransform`].

mod ops;
mod transform;

pub use ops::MAX_TEXT_LENGTH;
pub use transform::TextTransform;

use datakind_error::{DataError, Result};

use crate::scalar::{Flavor, Scalar};

impl<F: Flavor> Scalar<String, F> {
    /// Wrap a string
    pub fn from_string(value: impl Into<String>) -> Self {
        Self::new(value.into())
    }

    /// Text form of an integer
    pub fn from_integer(value: i64) -> Self {
        Self::new(value.to_string())
    }

    /// Text form of a float
    pub fn from_float(value: f64) -> Self {
        Self::new(value.to_string())
    }

    /// `"true"` or `"false"`
    pub fn from_boolean(value: bool) -> Self {
        Self::new(value.to_string())
    }

    #[inline]
    pub fn value(&self) -> &str {
        &self.value
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Number of chars
    pub fn length(&self) -> usize {
        ops::char_len(&self.value)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Char index of the first `search` at or after `start`.
    ///
    /// A negative `start` counts from the end. Fails when `|start|` exceeds
    /// the length or `search` is empty.
    pub fn index_of(&self, search: &str, start: i64) -> Result<Option<usize>> {
        ops::index_of(&self.value, search, start)
    }

    pub fn contains(&self, search: &str) -> Result<bool> {
        ops::require_non_empty("search", search)?;
        Ok(self.value.contains(search))
    }

    pub fn starts_with(&self, search: &str) -> Result<bool> {
        ops::require_non_empty("search", search)?;
        Ok(self.value.starts_with(search))
    }

    pub fn ends_with(&self, search: &str) -> Result<bool> {
        ops::require_non_empty("search", search)?;
        Ok(self.value.ends_with(search))
    }

    /// Non-overlapping occurrences of `search` inside the window
    /// `start`/`length`, resolved the same way as `sub_string`.
    pub fn count(&self, search: &str, start: i64, length: Option<i64>) -> Result<usize> {
        ops::count(&self.value, search, start, length)
    }

    pub fn equals(&self, other: impl AsRef<str>) -> bool {
        self.value == other.as_ref()
    }

    /// Parse the trimmed text as an integer
    pub fn to_integer(&self) -> Result<Scalar<i64, F>> {
        self.value
            .trim()
            .parse::<i64>()
            .map(Scalar::new)
            .map_err(|_| DataError::invalid_number(self.value.clone(), "integer"))
    }

    /// Parse the trimmed text as a float
    pub fn to_float(&self) -> Result<Scalar<f64, F>> {
        self.value
            .trim()
            .parse::<f64>()
            .map(Scalar::new)
            .map_err(|_| DataError::invalid_number(self.value.clone(), "float"))
    }

    /// `"1"`, `"true"` and `"yes"` in any case are true, anything else false
    pub fn to_boolean(&self) -> Scalar<bool, F> {
        Scalar::<bool, F>::from_string(&self.value)
    }
}

impl<F: Flavor> AsRef<str> for Scalar<String, F> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<F: Flavor> From<&str> for Scalar<String, F> {
    fn from(value: &str) -> Self {
        Self::from_string(value)
    }
}

impl<F: Flavor> From<String> for Scalar<String, F> {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl<F: Flavor> From<Scalar<String, F>> for String {
    fn from(text: Scalar<String, F>) -> Self {
        text.value
    }
}

#[cfg(test)]
mod tests {
    use crate::{ImmutableText, ReadonlyText};
    use datakind_error::DataError;

    #[test]
    fn test_length_counts_chars() {
        let text = ReadonlyText::from_string("naïve");
        assert_eq!(text.length(), 5);
        assert!(!text.is_empty());
    }

    #[test]
    fn test_search_requires_input() {
        let text = ImmutableText::from_string("abc");
        assert!(matches!(
            text.contains(""),
            Err(DataError::EmptyInput { .. })
        ));
        assert!(text.starts_with("ab").unwrap());
        assert!(text.ends_with("bc").unwrap());
        assert!(!text.contains("x").unwrap());
    }

    #[test]
    fn test_count_window() {
        let text = ReadonlyText::from_string("hello hello hello");
        assert_eq!(text.count("hello", 0, None).unwrap(), 3);
        assert_eq!(text.count("hello", 6, None).unwrap(), 2);
        assert_eq!(text.count("hello", 0, Some(-6)).unwrap(), 2);
        assert!(text.count("hello", 3, Some(20)).is_err());
    }

    #[test]
    fn test_numeric_conversions() {
        let text = ReadonlyText::from_string(" 42 ");
        assert_eq!(text.to_integer().unwrap().value(), 42);
        assert_eq!(text.to_float().unwrap().value(), 42.0);
        assert!(ReadonlyText::from_string("4x").to_integer().is_err());
    }

    #[test]
    fn test_to_boolean() {
        assert!(ReadonlyText::from_string("Yes").to_boolean().value());
        assert!(!ReadonlyText::from_string("no").to_boolean().value());
    }
}
