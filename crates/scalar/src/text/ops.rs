//! Pure text operations shared by every text flavor.
//!
//! Positions and lengths count chars, never bytes. Negative `start` counts
//! from the end; negative `length` omits that many trailing chars after the
//! start has been resolved.

use std::ops::Range;

use datakind_error::{DataError, Result};

/// Which end of the text receives padding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

/// How a pad length is interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PadMode {
    /// Pad up to a total length; no-op when already that long
    Fill,
    /// Always add exactly the given number of chars
    Extra,
}

/// Longest text, in chars, a padding operation may produce
pub const MAX_TEXT_LENGTH: usize = 16 * 1024 * 1024;

pub(crate) fn char_len(s: &str) -> usize {
    s.chars().count()
}

pub(crate) fn require_non_empty(argument: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DataError::empty_input(argument));
    }
    Ok(())
}

pub(crate) fn require_length(length: i64) -> Result<usize> {
    if length < 1 {
        return Err(DataError::invalid_length("length", length));
    }
    Ok(length as usize)
}

/// Resolve a possibly negative start position against `len` chars.
pub(crate) fn resolve_start(len: usize, start: i64) -> Result<usize> {
    if start.unsigned_abs() > len as u64 {
        let bound = len as i64;
        return Err(DataError::out_of_range("start", start, -bound, bound));
    }
    if start < 0 {
        Ok(len - start.unsigned_abs() as usize)
    } else {
        Ok(start as usize)
    }
}

/// Resolve a start/length window to a char range.
pub(crate) fn resolve_window(len: usize, start: i64, length: Option<i64>) -> Result<Range<usize>> {
    let from = resolve_start(len, start)?;
    let available = len - from;

    let to = match length {
        None => len,
        Some(length) => {
            if length.unsigned_abs() > available as u64 {
                let bound = available as i64;
                return Err(DataError::out_of_range("length", length, -bound, bound));
            }
            if length >= 0 {
                from + length as usize
            } else {
                len - length.unsigned_abs() as usize
            }
        }
    };

    Ok(from..to)
}

/// Byte offset of the char at `index`, or `s.len()` past the end.
fn byte_offset(s: &str, index: usize) -> usize {
    s.char_indices().nth(index).map_or(s.len(), |(offset, _)| offset)
}

fn char_slice(s: &str, range: Range<usize>) -> &str {
    let start = byte_offset(s, range.start);
    let end = start + byte_offset(&s[start..], range.end - range.start);
    &s[start..end]
}

pub(crate) fn sub_string(s: &str, start: i64, length: Option<i64>) -> Result<String> {
    let range = resolve_window(char_len(s), start, length)?;
    Ok(char_slice(s, range).to_owned())
}

pub(crate) fn sub_left(s: &str, length: i64) -> Result<String> {
    require_length(length)?;
    sub_string(s, 0, Some(length))
}

pub(crate) fn sub_right(s: &str, length: i64) -> Result<String> {
    require_length(length)?;
    sub_string(s, -length, None)
}

pub(crate) fn index_of(s: &str, search: &str, start: i64) -> Result<Option<usize>> {
    require_non_empty("search", search)?;
    let from = resolve_start(char_len(s), start)?;
    let offset = byte_offset(s, from);

    Ok(s[offset..]
        .find(search)
        .map(|found| from + char_len(&s[offset..offset + found])))
}

pub(crate) fn count(s: &str, search: &str, start: i64, length: Option<i64>) -> Result<usize> {
    require_non_empty("search", search)?;
    let range = resolve_window(char_len(s), start, length)?;
    Ok(char_slice(s, range).matches(search).count())
}

fn is_trimmable(c: char) -> bool {
    c.is_whitespace() || c == '\0'
}

pub(crate) fn trim(s: &str) -> String {
    s.trim_matches(is_trimmable).to_owned()
}

pub(crate) fn trim_left(s: &str) -> String {
    s.trim_start_matches(is_trimmable).to_owned()
}

pub(crate) fn trim_right(s: &str) -> String {
    s.trim_end_matches(is_trimmable).to_owned()
}

pub(crate) fn to_upper(s: &str) -> String {
    s.to_uppercase()
}

pub(crate) fn to_lower(s: &str) -> String {
    s.to_lowercase()
}

fn map_first(s: &str, f: impl Fn(char) -> String) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => f(first) + chars.as_str(),
        None => String::new(),
    }
}

pub(crate) fn to_upper_first(s: &str) -> String {
    map_first(s, |c| c.to_uppercase().collect())
}

pub(crate) fn to_lower_first(s: &str) -> String {
    map_first(s, |c| c.to_lowercase().collect())
}

/// Uppercase the first char of every whitespace-delimited word.
pub(crate) fn to_upper_words(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut word_start = true;
    for c in s.chars() {
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        word_start = c.is_whitespace();
    }
    out
}

pub(crate) fn pad(s: &str, length: i64, pad: &str, side: Side, mode: PadMode) -> Result<String> {
    let length = require_length(length)?;
    require_non_empty("pad", pad)?;

    let missing = match mode {
        PadMode::Fill => length.saturating_sub(char_len(s)),
        PadMode::Extra => length,
    };
    if missing == 0 {
        return Ok(s.to_owned());
    }

    let current = char_len(s);
    let room = MAX_TEXT_LENGTH.saturating_sub(current);
    if missing > room {
        return Err(DataError::out_of_range(
            "length",
            length as i64,
            1,
            room as i64,
        ));
    }

    let mut out = String::new();
    out.try_reserve(s.len().saturating_add(missing.saturating_mul(pad.len())))
        .map_err(|_| DataError::out_of_range("length", length as i64, 1, room as i64))?;
    if side == Side::Right {
        out.push_str(s);
    }
    out.extend(pad.chars().cycle().take(missing));
    if side == Side::Left {
        out.push_str(s);
    }
    Ok(out)
}

pub(crate) fn reverse(s: &str) -> String {
    s.chars().rev().collect()
}

pub(crate) fn replace(s: &str, search: &str, replacement: &str) -> Result<String> {
    require_non_empty("search", search)?;
    Ok(s.replace(search, replacement))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_window() {
        assert_eq!(resolve_window(6, 0, None).unwrap(), 0..6);
        assert_eq!(resolve_window(6, -3, None).unwrap(), 3..6);
        assert_eq!(resolve_window(6, 1, Some(-2)).unwrap(), 1..4);
        assert_eq!(resolve_window(6, 6, None).unwrap(), 6..6);
    }

    #[test]
    fn test_resolve_window_rejects_oversized() {
        assert!(matches!(
            resolve_window(6, 7, None),
            Err(DataError::OutOfRange { .. })
        ));
        assert!(matches!(
            resolve_window(6, -7, None),
            Err(DataError::OutOfRange { .. })
        ));
        assert!(matches!(
            resolve_window(6, 2, Some(5)),
            Err(DataError::OutOfRange { .. })
        ));
        assert!(matches!(
            resolve_window(6, 2, Some(-5)),
            Err(DataError::OutOfRange { .. })
        ));
        assert!(resolve_window(6, i64::MIN, None).is_err());
    }

    #[test]
    fn test_char_positions_not_bytes() {
        assert_eq!(sub_string("héllo", 1, Some(3)).unwrap(), "éll");
        assert_eq!(index_of("héllo", "l", 0).unwrap(), Some(2));
        assert_eq!(reverse("añb"), "bña");
    }

    #[test]
    fn test_index_of_from_start() {
        assert_eq!(index_of("abcabc", "b", 2).unwrap(), Some(4));
        assert_eq!(index_of("abcabc", "b", -2).unwrap(), Some(4));
        assert_eq!(index_of("abcabc", "z", 0).unwrap(), None);
        assert!(index_of("abc", "a", 4).is_err());
    }

    #[test]
    fn test_pad_rejects_lengths_past_max() {
        let err = pad("x", i64::MAX, "y", Side::Right, PadMode::Extra).unwrap_err();
        assert_eq!(
            err,
            DataError::out_of_range("length", i64::MAX, 1, MAX_TEXT_LENGTH as i64 - 1)
        );
        assert!(pad("x", i64::MAX, "y", Side::Left, PadMode::Fill).is_err());

        let full = pad("x", MAX_TEXT_LENGTH as i64 - 1, "y", Side::Left, PadMode::Extra).unwrap();
        assert_eq!(char_len(&full), MAX_TEXT_LENGTH);
    }

    #[test]
    fn test_pad_cycles_pad_string() {
        assert_eq!(
            pad("7", 4, "ab", Side::Left, PadMode::Fill).unwrap(),
            "aba7"
        );
        assert_eq!(
            pad("7", 2, "-", Side::Right, PadMode::Extra).unwrap(),
            "7--"
        );
    }

    #[test]
    fn test_to_upper_words() {
        assert_eq!(to_upper_words("hello big\tworld"), "Hello Big\tWorld");
    }

    #[test]
    fn test_trim_strips_nul() {
        assert_eq!(trim("\0 x \n"), "x");
    }
}
