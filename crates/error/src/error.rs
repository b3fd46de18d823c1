//! Data Error Types
//!
//! One error enum for every datakind operation. Variants carry the argument
//! or field that caused the failure so callers can report it without parsing
//! the message.

use thiserror::Error;

// ============================================================================
// MAIN ERROR TYPE
// ============================================================================

/// Failure raised by scalar, value object and collection operations.
///
/// Every failure is returned at the point of violation; nothing is retried
/// and nothing is partially applied.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DataError {
    /// A string argument that must be non-empty was empty
    #[error("{argument} must not be empty")]
    EmptyInput { argument: String },

    /// A length argument was below 1
    #[error("{argument} must be at least 1, got {value}")]
    InvalidLength { argument: String, value: i64 },

    /// An argument was rejected for a reason other than its range
    #[error("Invalid {argument}: {reason}")]
    InvalidArgument { argument: String, reason: String },

    /// A start/length window does not fit the underlying value
    #[error("{argument} {value} out of range [{min}, {max}]")]
    OutOfRange {
        argument: String,
        value: i64,
        min: i64,
        max: i64,
    },

    /// A value object was loaded without one of its required fields
    #[error("Required field '{field}' is missing")]
    RequiredFieldMissing { field: String },

    /// An entity with the same id is already stored
    #[error("Entry with id {id} already exists")]
    DuplicateEntry { id: i64 },

    /// No entry is stored under the requested id
    #[error("Entry with id {id} not found")]
    NotFound { id: i64 },

    /// An id, capacity or counter was zero or negative
    #[error("{argument} must be a positive integer, got {value}")]
    NonPositiveInteger { argument: String, value: i64 },

    /// A parameter exceeded the bound derived from another parameter
    #[error("Parameter {parameter} = {value} exceeds {max}")]
    ParameterOutOfRange {
        parameter: String,
        value: i64,
        max: i64,
    },

    /// A bounded list is already at capacity
    #[error("Capacity of {capacity} exceeded")]
    CapacityExceeded { capacity: usize },

    /// Division with a zero divisor
    #[error("Division of {dividend} by zero")]
    DivisionByZero { dividend: String },

    /// Checked integer arithmetic overflowed
    #[error("Numeric overflow in {operation}: {value}")]
    Overflow { operation: String, value: String },

    /// Text could not be parsed as a number
    #[error("Cannot parse '{input}' as {kind}")]
    InvalidNumber { input: String, kind: &'static str },

    /// A raw field value has the wrong shape for its cast
    #[error("Field '{field}' expected {expected}, got {actual}")]
    InvalidFieldType {
        field: String,
        expected: &'static str,
        actual: String,
    },

    /// A value object rule rejected the field mapping
    #[error("Rule '{rule}' failed: {reason}")]
    RuleViolation { rule: String, reason: String },

    /// JSON encoding or decoding failed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl DataError {
    /// Create an empty input error
    pub fn empty_input(argument: impl Into<String>) -> Self {
        Self::EmptyInput {
            argument: argument.into(),
        }
    }

    /// Create an invalid length error
    pub fn invalid_length(argument: impl Into<String>, value: i64) -> Self {
        Self::InvalidLength {
            argument: argument.into(),
            value,
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(argument: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            argument: argument.into(),
            reason: reason.into(),
        }
    }

    /// Create an out of range error
    pub fn out_of_range(argument: impl Into<String>, value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange {
            argument: argument.into(),
            value,
            min,
            max,
        }
    }

    /// Create a required field missing error
    pub fn required_field_missing(field: impl Into<String>) -> Self {
        Self::RequiredFieldMissing {
            field: field.into(),
        }
    }

    /// Create a duplicate entry error
    pub fn duplicate_entry(id: i64) -> Self {
        Self::DuplicateEntry { id }
    }

    /// Create a not found error
    pub fn not_found(id: i64) -> Self {
        Self::NotFound { id }
    }

    /// Create a non-positive integer error
    pub fn non_positive_integer(argument: impl Into<String>, value: i64) -> Self {
        Self::NonPositiveInteger {
            argument: argument.into(),
            value,
        }
    }

    /// Create a parameter out of range error
    pub fn parameter_out_of_range(parameter: impl Into<String>, value: i64, max: i64) -> Self {
        Self::ParameterOutOfRange {
            parameter: parameter.into(),
            value,
            max,
        }
    }

    /// Create a capacity exceeded error
    pub fn capacity_exceeded(capacity: usize) -> Self {
        Self::CapacityExceeded { capacity }
    }

    /// Create a division by zero error
    pub fn division_by_zero(dividend: impl ToString) -> Self {
        Self::DivisionByZero {
            dividend: dividend.to_string(),
        }
    }

    /// Create a numeric overflow error
    pub fn overflow(operation: impl Into<String>, value: impl ToString) -> Self {
        Self::Overflow {
            operation: operation.into(),
            value: value.to_string(),
        }
    }

    /// Create an invalid number error
    pub fn invalid_number(input: impl Into<String>, kind: &'static str) -> Self {
        Self::InvalidNumber {
            input: input.into(),
            kind,
        }
    }

    /// Create an invalid field type error
    pub fn invalid_field_type(
        field: impl Into<String>,
        expected: &'static str,
        actual: impl Into<String>,
    ) -> Self {
        Self::InvalidFieldType {
            field: field.into(),
            expected,
            actual: actual.into(),
        }
    }

    /// Create a rule violation error
    pub fn rule_violation(rule: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::RuleViolation {
            rule: rule.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// ERROR CLASSIFICATION
// ============================================================================

impl DataError {
    /// Stable error code for programmatic handling
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyInput { .. } => "DATA_EMPTY_INPUT",
            Self::InvalidLength { .. } => "DATA_INVALID_LENGTH",
            Self::InvalidArgument { .. } => "DATA_INVALID_ARGUMENT",
            Self::OutOfRange { .. } => "DATA_OUT_OF_RANGE",
            Self::RequiredFieldMissing { .. } => "DATA_REQUIRED_FIELD_MISSING",
            Self::DuplicateEntry { .. } => "DATA_DUPLICATE_ENTRY",
            Self::NotFound { .. } => "DATA_NOT_FOUND",
            Self::NonPositiveInteger { .. } => "DATA_NON_POSITIVE_INTEGER",
            Self::ParameterOutOfRange { .. } => "DATA_PARAMETER_OUT_OF_RANGE",
            Self::CapacityExceeded { .. } => "DATA_CAPACITY_EXCEEDED",
            Self::DivisionByZero { .. } => "DATA_DIVISION_BY_ZERO",
            Self::Overflow { .. } => "DATA_OVERFLOW",
            Self::InvalidNumber { .. } => "DATA_INVALID_NUMBER",
            Self::InvalidFieldType { .. } => "DATA_INVALID_FIELD_TYPE",
            Self::RuleViolation { .. } => "DATA_RULE_VIOLATION",
            Self::Serialization(_) => "DATA_SERIALIZATION",
        }
    }

    /// Check if this is a client error (caller passed bad input)
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::Serialization(_))
    }
}

// ============================================================================
// EXTERNAL ERROR CONVERSIONS
// ============================================================================

impl From<serde_json::Error> for DataError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization(error.to_string())
    }
}

// ============================================================================
// RESULT TYPE
// ============================================================================

/// Result type alias for datakind operations
pub type Result<T> = std::result::Result<T, DataError>;

// ============================================================================
// TESTS
// ============================================================================
