//! Static registration table of a value object type.
//!
//! A [`Schema`] is assembled from small components, each owning one concern
//! of the load pipeline:
//!
//! - [`RequiredFields`]: names that must be present in the input
//! - [`GuardedFields`]: names dropped from serialized output
//! - [`Rule`]: ordered cross-field transformations over the raw mapping
//! - [`Cast`]: per-field conversion from raw value to typed attribute
//! - [`HookTable`]: callbacks fired after load and on explicit update

use std::fmt;

use datakind_error::{DataError, Result};
use serde_json::Value;
use tracing::trace;

use crate::Fields;

// ============================================================================
// REQUIRED FIELDS
// ============================================================================

/// Field names that must be keys of the input mapping.
#[derive(Debug, Clone, Copy)]
pub struct RequiredFields(pub &'static [&'static str]);

impl RequiredFields {
    pub const NONE: Self = Self(&[]);

    /// Fails on the first missing name, in declaration order
    pub fn validate(&self, fields: &Fields) -> Result<()> {
        match self.0.iter().find(|name| !fields.contains_key(**name)) {
            Some(missing) => Err(DataError::required_field_missing(*missing)),
            None => Ok(()),
        }
    }
}

// ============================================================================
// GUARDED FIELDS
// ============================================================================

/// Field names kept in memory but excluded from serialized output.
#[derive(Debug, Clone, Copy)]
pub struct GuardedFields(pub &'static [&'static str]);

impl GuardedFields {
    pub const NONE: Self = Self(&[]);

    pub fn is_guarded(&self, name: &str) -> bool {
        self.0.contains(&name)
    }

    /// Remove every guarded name from an already serialized mapping
    pub fn filter(&self, mut fields: Fields) -> Fields {
        for name in self.0 {
            fields.remove(*name);
        }
        fields
    }
}

// ============================================================================
// RULES AND CASTS
// ============================================================================

/// Cross-field transformation over the raw mapping.
///
/// Rules run in declaration order; each one sees the edits of the previous.
#[derive(Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub apply: fn(Fields) -> Result<Fields>,
}

impl Rule {
    pub const fn new(name: &'static str, apply: fn(Fields) -> Result<Fields>) -> Self {
        Self { name, apply }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).finish()
    }
}

/// Conversion of one raw field into a typed attribute of `T`.
///
/// The cast assigns the attribute itself.
pub struct Cast<T> {
    pub field: &'static str,
    pub apply: fn(&mut T, &Value) -> Result<()>,
}

impl<T> Cast<T> {
    pub const fn new(field: &'static str, apply: fn(&mut T, &Value) -> Result<()>) -> Self {
        Self { field, apply }
    }
}

impl<T> Clone for Cast<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Cast<T> {}

impl<T> fmt::Debug for Cast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cast").field("field", &self.field).finish()
    }
}

// ============================================================================
// HOOKS
// ============================================================================

/// Callback over a loaded record, e.g. to derive state from cast attributes.
pub type Hook<T> = fn(&mut T) -> Result<()>;

/// Hooks fired once after load and on every explicit update, in order.
pub struct HookTable<T: 'static> {
    pub on_load: &'static [Hook<T>],
    pub on_update: &'static [Hook<T>],
}

impl<T: 'static> HookTable<T> {
    pub const NONE: Self = Self {
        on_load: &[],
        on_update: &[],
    };

    pub fn run_on_load(&self, record: &mut T) -> Result<()> {
        run_hooks("load", self.on_load, record)
    }

    pub fn run_on_update(&self, record: &mut T) -> Result<()> {
        run_hooks("update", self.on_update, record)
    }
}

fn run_hooks<T>(event: &str, hooks: &[Hook<T>], record: &mut T) -> Result<()> {
    for (index, hook) in hooks.iter().enumerate() {
        trace!(event, index, "running hook");
        hook(&mut *record)?;
    }
    Ok(())
}

impl<T: 'static> Clone for HookTable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: 'static> Copy for HookTable<T> {}

impl<T: 'static> fmt::Debug for HookTable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HookTable")
            .field("on_load", &self.on_load.len())
            .field("on_update", &self.on_update.len())
            .finish()
    }
}

// ============================================================================
// SCHEMA
// ============================================================================

/// Everything the load pipeline needs to know about a value object type.
///
/// Declared once as an associated constant; start from [`Schema::EMPTY`] and
/// override what the type uses:
///
/// ```rust,ignore
/// const SCHEMA: Schema<Self> = Schema {
///     required: RequiredFields(&["name"]),
///     guarded: GuardedFields(&["password"]),
///     casts: &[Cast::new("name", Self::cast_name)],
///     ..Schema::EMPTY
/// };
/// ```
pub struct Schema<T: 'static> {
    pub required: RequiredFields,
    pub guarded: GuardedFields,
    pub rules: &'static [Rule],
    pub casts: &'static [Cast<T>],
    pub hooks: HookTable<T>,
}

impl<T: 'static> Schema<T> {
    pub const EMPTY: Self = Self {
        required: RequiredFields::NONE,
        guarded: GuardedFields::NONE,
        rules: &[],
        casts: &[],
        hooks: HookTable::NONE,
    };

    /// Cast registered for `field`, if any
    pub fn cast_for(&self, field: &str) -> Option<&Cast<T>> {
        self.casts.iter().find(|cast| cast.field == field)
    }
}

impl<T: 'static> fmt::Debug for Schema<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Schema")
            .field("required", &self.required)
            .field("guarded", &self.guarded)
            .field("rules", &self.rules)
            .field("casts", &self.casts)
            .field("hooks", &self.hooks)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Fields {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_required_reports_first_missing() {
        let required = RequiredFields(&["name", "email"]);
        let err = required.validate(&fields(json!({"email": "a@b"}))).unwrap_err();
        assert_eq!(err, DataError::required_field_missing("name"));
        assert!(required.validate(&fields(json!({"name": null, "email": 1}))).is_ok());
    }

    #[test]
    fn test_guarded_filter() {
        let guarded = GuardedFields(&["password", "token"]);
        let out = guarded.filter(fields(json!({"name": "a", "password": "p"})));
        assert_eq!(Value::Object(out), json!({"name": "a"}));
        assert!(guarded.is_guarded("token"));
        assert!(!guarded.is_guarded("name"));
    }

    #[test]
    fn test_hooks_run_in_order() {
        fn push_a(log: &mut Vec<char>) -> Result<()> {
            log.push('a');
            Ok(())
        }
        fn push_b(log: &mut Vec<char>) -> Result<()> {
            log.push('b');
            Ok(())
        }

        const HOOKS: HookTable<Vec<char>> = HookTable {
            on_load: &[push_a, push_b],
            on_update: &[push_b],
        };
        let mut log = Vec::new();
        HOOKS.run_on_load(&mut log).unwrap();
        HOOKS.run_on_update(&mut log).unwrap();
        assert_eq!(log, vec!['a', 'b', 'b']);
    }

    #[test]
    fn test_cast_for_looks_up_by_field() {
        fn set_len(out: &mut usize, value: &Value) -> Result<()> {
            *out = value.as_str().map_or(0, str::len);
            Ok(())
        }

        const SCHEMA: Schema<usize> = Schema {
            casts: &[Cast::new("name", set_len)],
            ..Schema::EMPTY
        };
        let schema = &SCHEMA;
        let cast = schema.cast_for("name").unwrap();
        assert_eq!(cast.field, "name");

        let mut len = 0;
        (cast.apply)(&mut len, &json!("abcd")).unwrap();
        assert_eq!(len, 4);
        assert!(schema.cast_for("email").is_none());
        assert!(Schema::<usize>::EMPTY.cast_for("name").is_none());
    }
}
