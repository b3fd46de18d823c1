//! Cast helpers
//!
//! Conversions from a raw JSON field into typed attributes, used from the
//! `apply` functions of a [`Cast`](crate::Cast). Each helper names the field
//! in its error so a failed load points at the offending input.

use datakind_error::{DataError, Result};
use datakind_scalar::{Flavor, PositiveInteger, Scalar, Timestamp};
use serde_json::Value;

use crate::describe;

/// Strings as-is; numbers and booleans through their text form
pub fn text<F: Flavor>(field: &str, value: &Value) -> Result<Scalar<String, F>> {
    match value {
        Value::String(s) => Ok(Scalar::<String, F>::from_string(s.as_str())),
        Value::Bool(b) => Ok(Scalar::<String, F>::from_boolean(*b)),
        Value::Number(n) => Ok(Scalar::<String, F>::from_string(n.to_string())),
        other => Err(mismatch(field, "text", other)),
    }
}

/// Whole numbers or numeric strings
pub fn integer<F: Flavor>(field: &str, value: &Value) -> Result<Scalar<i64, F>> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .map(Scalar::<i64, F>::from_integer)
            .ok_or_else(|| mismatch(field, "integer", value)),
        Value::String(s) => Scalar::<i64, F>::from_string(s),
        other => Err(mismatch(field, "integer", other)),
    }
}

pub fn float<F: Flavor>(field: &str, value: &Value) -> Result<Scalar<f64, F>> {
    match value {
        Value::Number(n) => n
            .as_f64()
            .map(Scalar::<f64, F>::from_float)
            .ok_or_else(|| mismatch(field, "float", value)),
        Value::String(s) => Scalar::<f64, F>::from_string(s),
        other => Err(mismatch(field, "float", other)),
    }
}

/// Booleans, numbers (`> 0`) and the usual truthy strings
pub fn boolean<F: Flavor>(field: &str, value: &Value) -> Result<Scalar<bool, F>> {
    match value {
        Value::Bool(b) => Ok(Scalar::<bool, F>::from_boolean(*b)),
        Value::Number(n) => match n.as_i64() {
            Some(i) => Ok(Scalar::<bool, F>::from_integer(i)),
            None => n
                .as_f64()
                .map(Scalar::<bool, F>::from_float)
                .ok_or_else(|| mismatch(field, "boolean", value)),
        },
        Value::String(s) => Ok(Scalar::<bool, F>::from_string(s)),
        other => Err(mismatch(field, "boolean", other)),
    }
}

pub fn positive_integer(field: &str, value: &Value) -> Result<PositiveInteger> {
    match value {
        Value::Number(n) => match n.as_i64() {
            Some(i) => PositiveInteger::named(field, i),
            None => Err(mismatch(field, "positive integer", value)),
        },
        Value::String(s) => {
            let parsed = s
                .trim()
                .parse::<i64>()
                .map_err(|_| DataError::invalid_number(s.as_str(), "integer"))?;
            PositiveInteger::named(field, parsed)
        }
        other => Err(mismatch(field, "positive integer", other)),
    }
}

/// Date strings, or integers read as Unix seconds
pub fn timestamp(field: &str, value: &Value) -> Result<Timestamp> {
    match value {
        Value::String(s) => Timestamp::from_string(s),
        Value::Number(n) => n
            .as_i64()
            .ok_or_else(|| mismatch(field, "timestamp", value))
            .and_then(Timestamp::from_unix),
        other => Err(mismatch(field, "timestamp", other)),
    }
}

/// `null` maps to `None`; anything else goes through `cast`
pub fn nullable<T>(
    field: &str,
    value: &Value,
    cast: impl FnOnce(&str, &Value) -> Result<T>,
) -> Result<Option<T>> {
    match value {
        Value::Null => Ok(None),
        other => cast(field, other).map(Some),
    }
}

fn mismatch(field: &str, expected: &'static str, actual: &Value) -> DataError {
    DataError::invalid_field_type(field, expected, describe(actual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use datakind_scalar::{Immutable, Mutable, Readonly};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case(json!("ada"), "ada")]
    #[case(json!(42), "42")]
    #[case(json!(true), "true")]
    fn test_text(#[case] raw: Value, #[case] expected: &str) {
        let value = text::<Immutable>("name", &raw).unwrap();
        assert_eq!(value.as_str(), expected);
    }

    #[test]
    fn test_text_rejects_structures() {
        let err = text::<Readonly>("name", &json!(["a"])).unwrap_err();
        assert_eq!(err, DataError::invalid_field_type("name", "text", "array"));
    }

    #[rstest]
    #[case(json!(7), 7)]
    #[case(json!(" -3 "), -3)]
    fn test_integer(#[case] raw: Value, #[case] expected: i64) {
        assert_eq!(integer::<Mutable>("age", &raw).unwrap().value(), expected);
    }

    #[test]
    fn test_integer_rejects_fractions() {
        let err = integer::<Immutable>("age", &json!(1.5)).unwrap_err();
        assert_eq!(err, DataError::invalid_field_type("age", "integer", "number"));
        assert!(integer::<Immutable>("age", &json!("abc")).is_err());
    }

    #[test]
    fn test_float_and_boolean() {
        assert_eq!(float::<Immutable>("price", &json!(3)).unwrap().value(), 3.0);
        assert_eq!(float::<Immutable>("price", &json!("2.5")).unwrap().value(), 2.5);
        assert!(boolean::<Readonly>("active", &json!("yes")).unwrap().is_true());
        assert!(boolean::<Readonly>("active", &json!(0)).unwrap().is_false());
        assert!(boolean::<Readonly>("active", &json!(null)).is_err());
    }

    #[test]
    fn test_positive_integer() {
        assert_eq!(positive_integer("id", &json!(5)).unwrap().get(), 5);
        assert_eq!(
            positive_integer("id", &json!(0)).unwrap_err(),
            DataError::non_positive_integer("id", 0)
        );
    }

    #[test]
    fn test_timestamp() {
        let ts = timestamp("created", &json!("2024-01-01 00:00:00")).unwrap();
        assert_eq!(ts, timestamp("created", &json!(1_704_067_200)).unwrap());
    }

    #[test]
    fn test_nullable() {
        assert_eq!(nullable("id", &json!(null), positive_integer).unwrap(), None);
        assert_eq!(
            nullable("id", &json!(3), positive_integer).unwrap().map(PositiveInteger::get),
            Some(3)
        );
    }
}
