//! # datakind-entity
//!
//! Value objects built from a field mapping through a fixed pipeline:
//! required fields, rules, casts, hooks. Output goes through an explicit
//! attribute listing with guarded fields filtered out.
//!
//! The registration table of each type is a static [`Schema`] constant, so
//! nothing about a value object's shape is discovered at runtime.

pub mod cast;
mod schema;
mod serialize;
mod value_object;

pub use schema::{Cast, GuardedFields, Hook, HookTable, RequiredFields, Rule, Schema};
pub use serialize::{FieldWriter, JsonSerializable};
pub use value_object::{Identifiable, ValueObject};

/// Raw field mapping a value object is loaded from
pub type Fields = serde_json::Map<String, serde_json::Value>;

/// JSON type name used in type mismatch errors
pub(crate) fn describe(value: &serde_json::Value) -> &'static str {
    use serde_json::Value;
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Prelude for common imports
pub mod prelude {
    pub use crate::cast;
    pub use crate::{
        Cast, FieldWriter, Fields, GuardedFields, HookTable, Identifiable, JsonSerializable,
        RequiredFields, Rule, Schema, ValueObject,
    };
    pub use datakind_error::{DataError, Result};
}
