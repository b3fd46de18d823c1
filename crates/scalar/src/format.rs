//! Number formatting
//!
//! Numeric scalars do not know about locales. [`format`](crate::Scalar::format)
//! takes any [`NumberFormatter`]; [`NumberFormat`] is the bundled one, driven
//! by separator and precision settings that can be loaded from JSON.

use datakind_error::Result;
use serde::{Deserialize, Serialize};

/// Locale-aware rendering of numbers.
pub trait NumberFormatter {
    fn format_integer(&self, value: i64) -> String;
    fn format_float(&self, value: f64) -> String;
}

/// Separator and precision settings.
///
/// Missing keys fall back to the English defaults.
///
/// ```rust,ignore
/// let format = NumberFormat::from_json(r#"{"decimal_separator": ",", "thousands_separator": "."}"#)?;
/// assert_eq!(ImmutableFloat::from_float(1234.5).format(&format), "1.234,50");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumberFormat {
    pub decimal_separator: String,
    pub thousands_separator: String,
    /// Digits after the decimal separator for floats
    pub precision: usize,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::en()
    }
}

impl NumberFormat {
    /// `1,234.50`
    pub fn en() -> Self {
        Self {
            decimal_separator: ".".to_string(),
            thousands_separator: ",".to_string(),
            precision: 2,
        }
    }

    /// `1.234,50`
    pub fn de() -> Self {
        Self {
            decimal_separator: ",".to_string(),
            thousands_separator: ".".to_string(),
            precision: 2,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use = "builder methods must be chained or built"]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    fn group(&self, digits: &str) -> String {
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push_str(&self.thousands_separator);
            }
            out.push(c);
        }
        out
    }
}

impl NumberFormatter for NumberFormat {
    fn format_integer(&self, value: i64) -> String {
        let grouped = self.group(&value.unsigned_abs().to_string());
        if value < 0 {
            format!("-{grouped}")
        } else {
            grouped
        }
    }

    fn format_float(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.*}", self.precision, value.abs());
        let (whole, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

        let mut out = String::new();
        // -0.00 renders as 0.00
        if value < 0.0 && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
            out.push('-');
        }
        out.push_str(&self.group(whole));
        if !fraction.is_empty() {
            out.push_str(&self.decimal_separator);
            out.push_str(fraction);
        }
        out
    }
}
