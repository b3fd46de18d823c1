//! Value object load pipeline
//!
//! A value object is built once from a field mapping and is never partially
//! populated. [`ValueObject::load`] runs, in this order:
//!
//! 1. required-field validation
//! 2. rules, in declaration order, each over the previous rule's output
//! 3. casts: every field of the rule output that has a registered cast is
//!    handed to it, in the order of the mapping
//! 4. on-load hooks, in declaration order
//!
//! Fields without a registered cast are not assigned.
//!
//! Guarded fields never leave the record: [`ValueObject::to_array`] and
//! [`to_json`](JsonSerializable::to_json) both list every attribute first and
//! drop the guarded names afterwards.

use std::any::type_name;

use datakind_error::{DataError, Result};
use serde_json::Value;
use tracing::{debug, trace};

use crate::schema::Schema;
use crate::serialize::{FieldWriter, JsonSerializable};
use crate::{Fields, describe};

/// A record built from a field mapping and exposed through typed getters.
///
/// ```rust,ignore
/// #[derive(Debug, Default)]
/// struct Tag {
///     label: ImmutableText,
/// }
///
/// impl Tag {
///     fn cast_label(&mut self, value: &Value) -> Result<()> {
///         self.label = cast::text("label", value)?;
///         Ok(())
///     }
/// }
///
/// impl ValueObject for Tag {
///     const SCHEMA: Schema<Self> = Schema {
///         required: RequiredFields(&["label"]),
///         casts: &[Cast::new("label", Self::cast_label)],
///         ..Schema::EMPTY
///     };
///
///     fn write_fields(&self, out: &mut FieldWriter) -> Result<()> {
///         out.value("label", &self.label)?;
///         Ok(())
///     }
/// }
///
/// let tag = Tag::from_json(r#"{"label": "rust"}"#)?;
/// ```
pub trait ValueObject: Default + Sized + 'static {
    /// Registration table consulted by the pipeline
    const SCHEMA: Schema<Self>;

    /// List every attribute. Guarded names are removed afterwards by
    /// [`to_array`](Self::to_array), not here.
    fn write_fields(&self, out: &mut FieldWriter) -> Result<()>;

    /// Run the load pipeline over a field mapping
    fn load(fields: Fields) -> Result<Self> {
        let schema = &Self::SCHEMA;
        schema.required.validate(&fields)?;

        let mut fields = fields;
        for rule in schema.rules {
            trace!(record = type_name::<Self>(), rule = rule.name, "applying rule");
            fields = (rule.apply)(fields)?;
        }

        let mut record = Self::default();
        let mut cast_count = 0;
        for (name, value) in &fields {
            if let Some(cast) = schema.cast_for(name) {
                trace!(record = type_name::<Self>(), field = cast.field, "casting field");
                (cast.apply)(&mut record, value)?;
                cast_count += 1;
            }
        }

        schema.hooks.run_on_load(&mut record)?;

        debug!(
            record = type_name::<Self>(),
            fields = fields.len(),
            casts = cast_count,
            "value object loaded"
        );
        Ok(record)
    }

    /// Load from a JSON value; anything but an object fails
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Self::load(fields),
            other => Err(DataError::invalid_field_type(
                type_name::<Self>(),
                "object",
                describe(&other),
            )),
        }
    }

    /// Parse JSON text and load it
    fn from_json(json: &str) -> Result<Self> {
        Self::from_value(serde_json::from_str(json)?)
    }

    /// Fire the on-update hooks, in order
    fn trigger_update(&mut self) -> Result<()> {
        debug!(record = type_name::<Self>(), "value object updated");
        Self::SCHEMA.hooks.run_on_update(self)
    }

    /// Serialized attributes without the guarded ones
    fn to_array(&self) -> Result<Fields> {
        let fields = list_fields(self)?;
        Ok(Self::SCHEMA.guarded.filter(fields))
    }
}

/// Full attribute listing, guarded names included
fn list_fields<T: ValueObject>(record: &T) -> Result<Fields> {
    let mut out = FieldWriter::new();
    record.write_fields(&mut out)?;
    Ok(out.into_fields())
}

impl<T: ValueObject> JsonSerializable for T {
    fn to_json(&self) -> Result<Value> {
        self.to_array().map(Value::Object)
    }
}

/// Value objects stored by id in an entity collection.
pub trait Identifiable {
    /// Must be positive; collections reject anything else
    fn id(&self) -> i64;
}
