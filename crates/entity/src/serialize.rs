//! Explicit attribute serialization.
//!
//! A value object lists its own attributes into a [`FieldWriter`], choosing
//! per attribute how it is rendered:
//!
//! - [`value`](FieldWriter::value): serde-serializable data, passed through
//! - [`nested`](FieldWriter::nested): another [`JsonSerializable`], serialized recursively
//! - [`display`](FieldWriter::display): anything with a string form, stringified

use std::fmt::Display;

use datakind_error::Result;
use serde::Serialize;
use serde_json::Value;

use crate::Fields;

/// Types that render themselves as a JSON value.
pub trait JsonSerializable {
    fn to_json(&self) -> Result<Value>;

    fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json()?)?)
    }
}

/// Collects the attributes of one record, in the order written.
#[derive(Debug, Default)]
pub struct FieldWriter {
    fields: Fields,
}

impl FieldWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pass a serde-serializable attribute through unchanged
    pub fn value(&mut self, name: &str, value: &impl Serialize) -> Result<&mut Self> {
        self.fields.insert(name.to_owned(), serde_json::to_value(value)?);
        Ok(self)
    }

    /// Serialize an attribute through its own serialization contract
    pub fn nested(&mut self, name: &str, value: &impl JsonSerializable) -> Result<&mut Self> {
        self.fields.insert(name.to_owned(), value.to_json()?);
        Ok(self)
    }

    /// Stringify an attribute
    pub fn display(&mut self, name: &str, value: &impl Display) -> &mut Self {
        self.fields
            .insert(name.to_owned(), Value::String(value.to_string()));
        self
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }
}
