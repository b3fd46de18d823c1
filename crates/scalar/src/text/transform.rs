//! Text transformations
//!
//! Implemented for `&ImmutableText` (every call builds a new wrapper) and
//! `&mut MutableText` (every call rewrites the value and hands the same
//! handle back for chaining).

use datakind_error::Result;

use super::ops::{self, PadMode, Side};
use crate::scalar::{Immutable, Mutable, Scalar};

/// Transformations over a text scalar.
///
/// ```rust,ignore
/// use datakind_scalar::prelude::*;
///
/// let greeting = ImmutableText::from_string("  Hello  ");
/// let trimmed = greeting.trim();
/// assert_eq!(trimmed.value(), "Hello");
/// assert_eq!(greeting.value(), "  Hello  ");
///
/// let mut name = MutableText::from_string("ada");
/// name.to_upper_first().pad_right(5, ".")?;
/// assert_eq!(name.value(), "Ada..");
/// ```
pub trait TextTransform: Sized {
    /// New wrapper or the same mutable handle
    type Output;

    /// Apply an infallible text function
    fn map_text(self, f: impl FnOnce(&str) -> String) -> Self::Output;

    /// Apply a fallible text function; on failure nothing changes
    fn try_map_text(self, f: impl FnOnce(&str) -> Result<String>) -> Result<Self::Output>;

    fn trim(self) -> Self::Output {
        self.map_text(ops::trim)
    }

    fn trim_left(self) -> Self::Output {
        self.map_text(ops::trim_left)
    }

    fn trim_right(self) -> Self::Output {
        self.map_text(ops::trim_right)
    }

    fn to_upper(self) -> Self::Output {
        self.map_text(ops::to_upper)
    }

    fn to_upper_first(self) -> Self::Output {
        self.map_text(ops::to_upper_first)
    }

    fn to_upper_words(self) -> Self::Output {
        self.map_text(ops::to_upper_words)
    }

    fn to_lower(self) -> Self::Output {
        self.map_text(ops::to_lower)
    }

    fn to_lower_first(self) -> Self::Output {
        self.map_text(ops::to_lower_first)
    }

    /// Pad on the left up to `length` chars. No-op when already that long.
    fn pad_left(self, length: i64, pad: &str) -> Result<Self::Output> {
        self.try_map_text(|s| ops::pad(s, length, pad, Side::Left, PadMode::Fill))
    }

    /// Pad on the right up to `length` chars. No-op when already that long.
    fn pad_right(self, length: i64, pad: &str) -> Result<Self::Output> {
        self.try_map_text(|s| ops::pad(s, length, pad, Side::Right, PadMode::Fill))
    }

    /// Prepend exactly `length` pad chars. Fails with `OutOfRange` when the
    /// result would pass [`MAX_TEXT_LENGTH`](crate::MAX_TEXT_LENGTH) chars.
    fn pad_left_extra(self, length: i64, pad: &str) -> Result<Self::Output> {
        self.try_map_text(|s| ops::pad(s, length, pad, Side::Left, PadMode::Extra))
    }

    /// Append exactly `length` pad chars, bounded like
    /// [`pad_left_extra`](Self::pad_left_extra)
    fn pad_right_extra(self, length: i64, pad: &str) -> Result<Self::Output> {
        self.try_map_text(|s| ops::pad(s, length, pad, Side::Right, PadMode::Extra))
    }

    /// Window of the text.
    ///
    /// A negative `start` counts from the end. A negative `length` omits that
    /// many trailing chars. Fails when the window does not fit.
    fn sub_string(self, start: i64, length: Option<i64>) -> Result<Self::Output> {
        self.try_map_text(|s| ops::sub_string(s, start, length))
    }

    /// First `length` chars
    fn sub_left(self, length: i64) -> Result<Self::Output> {
        self.try_map_text(|s| ops::sub_left(s, length))
    }

    /// Last `length` chars
    fn sub_right(self, length: i64) -> Result<Self::Output> {
        self.try_map_text(|s| ops::sub_right(s, length))
    }

    fn reverse(self) -> Self::Output {
        self.map_text(ops::reverse)
    }

    /// Replace every occurrence of `search`
    fn replace(self, search: &str, replacement: &str) -> Result<Self::Output> {
        self.try_map_text(|s| ops::replace(s, search, replacement))
    }
}

impl TextTransform for &Scalar<String, Immutable> {
    type Output = Scalar<String, Immutable>;

    fn map_text(self, f: impl FnOnce(&str) -> String) -> Self::Output {
        Scalar::new(f(&self.value))
    }

    fn try_map_text(self, f: impl FnOnce(&str) -> Result<String>) -> Result<Self::Output> {
        f(&self.value).map(Scalar::new)
    }
}

impl<'a> TextTransform for &'a mut Scalar<String, Mutable> {
    type Output = &'a mut Scalar<String, Mutable>;

    fn map_text(self, f: impl FnOnce(&str) -> String) -> Self::Output {
        self.value = f(&self.value);
        self
    }

    fn try_map_text(self, f: impl FnOnce(&str) -> Result<String>) -> Result<Self::Output> {
        self.value = f(&self.value)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ImmutableText, MAX_TEXT_LENGTH, MutableText, ReadonlyText};
    use datakind_error::DataError;

    #[test]
    fn test_immutable_trim_leaves_original() {
        let original = ImmutableText::from_string("  Hello  ");
        let trimmed = original.trim();
        assert_eq!(trimmed.value(), "Hello");
        assert_eq!(original.value(), "  Hello  ");
    }

    #[test]
    fn test_mutable_chain_rewrites_in_place() {
        let mut text = MutableText::from_string("  ada lovelace ");
        text.trim().to_upper_words();
        assert_eq!(text.value(), "Ada Lovelace");
    }

    #[test]
    fn test_mutable_failure_keeps_value() {
        let mut text = MutableText::from_string("abc");
        let err = text.pad_left(5, "").unwrap_err();
        assert!(matches!(err, DataError::EmptyInput { .. }));
        assert_eq!(text.value(), "abc");
    }

    #[test]
    fn test_sub_string_examples() {
        let text = ImmutableText::from_string("abcdef");
        assert_eq!(text.sub_string(-3, None).unwrap().value(), "def");
        assert_eq!(text.sub_string(1, Some(-2)).unwrap().value(), "bcd");
    }

    #[test]
    fn test_sub_left_rejects_non_positive() {
        let text = ImmutableText::from_string("abcdef");
        assert!(matches!(
            text.sub_left(0),
            Err(DataError::InvalidLength { value: 0, .. })
        ));
        assert!(matches!(
            text.sub_right(-1),
            Err(DataError::InvalidLength { .. })
        ));
        assert!(matches!(
            text.sub_left(7),
            Err(DataError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_case_helpers() {
        let text = ImmutableText::from_string("hELLO");
        assert_eq!(text.to_lower().value(), "hello");
        assert_eq!(text.to_upper().value(), "HELLO");
        assert_eq!(text.to_upper_first().value(), "HELLO");
        assert_eq!(text.to_lower_first().value(), "hELLO");
        assert_eq!(
            ImmutableText::from_string("World").to_lower_first().value(),
            "world"
        );
    }

    #[test]
    fn test_replace() {
        let text = ImmutableText::from_string("a-b-c");
        assert_eq!(text.replace("-", "+").unwrap().value(), "a+b+c");
        assert_eq!(text.replace("x", "+").unwrap().value(), "a-b-c");
        assert!(text.replace("", "+").is_err());
    }

    #[test]
    fn test_one_sided_trims() {
        let text = ImmutableText::from_string("\0 padded \t");
        assert_eq!(text.trim_left().value(), "padded \t");
        assert_eq!(text.trim_right().value(), "\0 padded");

        let mut live = MutableText::from_string("  x  ");
        live.trim_right();
        assert_eq!(live.value(), "  x");
    }

    #[test]
    fn test_readonly_equals() {
        let text = ReadonlyText::from_string("abc");
        assert!(text.equals("abc"));
        assert!(text.equals(String::from("abc")));
        assert!(!text.equals("ABC"));
        assert!(text.equals(&ReadonlyText::from_string("abc")));
    }

    #[test]
    fn test_pad_extra_past_max_is_an_error() {
        let text = ImmutableText::from_string("x");
        assert!(matches!(
            text.pad_right_extra(i64::MAX, "y"),
            Err(DataError::OutOfRange { .. })
        ));

        let mut live = MutableText::from_string("x");
        let too_long = MAX_TEXT_LENGTH as i64;
        assert!(live.pad_left_extra(too_long, "y").is_err());
        assert_eq!(live.value(), "x");
    }
}
