//! # datakind-error
//!
//! Error taxonomy shared by every datakind crate.
//!
//! - [`DataError`]: the failure returned by scalar, value object and
//!   collection operations, with a stable [`code`](DataError::code) per kind.
//! - [`HttpError`]: HTTP status taxonomy with default reason phrases, and a
//!   mapping from [`DataError`] for callers that answer over HTTP.

mod error;
mod http;

pub use error::{DataError, Result};
pub use http::HttpError;
