//! HTTP error taxonomy
//!
//! Maps HTTP status codes to a typed error with a default reason phrase.
//! Detail text can override the reason for a single occurrence.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

use crate::DataError;

/// HTTP-style failure with a status code and a message.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    #[error("{}", message_or(.0, "Bad Request"))]
    BadRequest(Option<String>),

    #[error("{}", message_or(.0, "Unauthorized"))]
    Unauthorized(Option<String>),

    #[error("{}", message_or(.0, "Forbidden"))]
    Forbidden(Option<String>),

    #[error("{}", message_or(.0, "Not Found"))]
    NotFound(Option<String>),

    #[error("{}", message_or(.0, "Method Not Allowed"))]
    MethodNotAllowed(Option<String>),

    #[error("{}", message_or(.0, "Conflict"))]
    Conflict(Option<String>),

    #[error("{}", message_or(.0, "Gone"))]
    Gone(Option<String>),

    #[error("{}", message_or(.0, "Unsupported Media Type"))]
    UnsupportedMediaType(Option<String>),

    #[error("{}", message_or(.0, "Unprocessable Entity"))]
    UnprocessableEntity(Option<String>),

    #[error("{}", message_or(.0, "Too Many Requests"))]
    TooManyRequests(Option<String>),

    #[error("{}", message_or(.0, "Internal Server Error"))]
    InternalServerError(Option<String>),

    #[error("{}", message_or(.0, "Not Implemented"))]
    NotImplemented(Option<String>),

    #[error("{}", message_or(.0, "Bad Gateway"))]
    BadGateway(Option<String>),

    #[error("{}", message_or(.0, "Service Unavailable"))]
    ServiceUnavailable(Option<String>),

    #[error("{}", message_or(.0, "Gateway Timeout"))]
    GatewayTimeout(Option<String>),
}

fn message_or<'a>(detail: &'a Option<String>, default: &'a str) -> &'a str {
    detail.as_deref().unwrap_or(default)
}

impl HttpError {
    /// Build the error for a status code with its default reason.
    ///
    /// Returns `None` for codes outside the taxonomy.
    pub fn from_status(status: u16) -> Option<Self> {
        let error = match status {
            400 => Self::BadRequest(None),
            401 => Self::Unauthorized(None),
            403 => Self::Forbidden(None),
            404 => Self::NotFound(None),
            405 => Self::MethodNotAllowed(None),
            409 => Self::Conflict(None),
            410 => Self::Gone(None),
            415 => Self::UnsupportedMediaType(None),
            422 => Self::UnprocessableEntity(None),
            429 => Self::TooManyRequests(None),
            500 => Self::InternalServerError(None),
            501 => Self::NotImplemented(None),
            502 => Self::BadGateway(None),
            503 => Self::ServiceUnavailable(None),
            504 => Self::GatewayTimeout(None),
            _ => return None,
        };
        Some(error)
    }

    /// Replace the default reason with occurrence-specific detail
    #[must_use = "builder methods must be chained or built"]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        *self.detail_mut() = Some(detail.into());
        self
    }

    fn detail_mut(&mut self) -> &mut Option<String> {
        match self {
            Self::BadRequest(d)
            | Self::Unauthorized(d)
            | Self::Forbidden(d)
            | Self::NotFound(d)
            | Self::MethodNotAllowed(d)
            | Self::Conflict(d)
            | Self::Gone(d)
            | Self::UnsupportedMediaType(d)
            | Self::UnprocessableEntity(d)
            | Self::TooManyRequests(d)
            | Self::InternalServerError(d)
            | Self::NotImplemented(d)
            | Self::BadGateway(d)
            | Self::ServiceUnavailable(d)
            | Self::GatewayTimeout(d) => d,
        }
    }

    /// Numeric HTTP status
    pub fn status(&self) -> u16 {
        match self {
            Self::BadRequest(_) => 400,
            Self::Unauthorized(_) => 401,
            Self::Forbidden(_) => 403,
            Self::NotFound(_) => 404,
            Self::MethodNotAllowed(_) => 405,
            Self::Conflict(_) => 409,
            Self::Gone(_) => 410,
            Self::UnsupportedMediaType(_) => 415,
            Self::UnprocessableEntity(_) => 422,
            Self::TooManyRequests(_) => 429,
            Self::InternalServerError(_) => 500,
            Self::NotImplemented(_) => 501,
            Self::BadGateway(_) => 502,
            Self::ServiceUnavailable(_) => 503,
            Self::GatewayTimeout(_) => 504,
        }
    }

    /// Detail text if set, otherwise the default reason phrase
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status())
    }

    pub fn is_server_error(&self) -> bool {
        self.status() >= 500
    }
}

impl Serialize for HttpError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("HttpError", 2)?;
        state.serialize_field("status", &self.status())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

impl From<&DataError> for HttpError {
    fn from(error: &DataError) -> Self {
        let detail = Some(error.to_string());
        match error {
            DataError::NotFound { .. } => Self::NotFound(detail),
            DataError::DuplicateEntry { .. } => Self::Conflict(detail),
            DataError::Serialization(_) => Self::InternalServerError(detail),
            _ if error.is_client_error() => Self::UnprocessableEntity(detail),
            _ => Self::InternalServerError(detail),
        }
    }
}

impl From<DataError> for HttpError {
    fn from(error: DataError) -> Self {
        Self::from(&error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reason() {
        let err = HttpError::from_status(404).unwrap();
        assert_eq!(err.status(), 404);
        assert_eq!(err.message(), "Not Found");
    }

    #[test]
    fn test_detail_overrides_reason() {
        let err = HttpError::Forbidden(None).with_detail("admins only");
        assert_eq!(err.to_string(), "admins only");
        assert_eq!(err.status(), 403);
    }

    #[test]
    fn test_unknown_status() {
        assert!(HttpError::from_status(418).is_none());
        assert!(HttpError::from_status(200).is_none());
    }
}
