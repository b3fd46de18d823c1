//! # datakind-scalar
//!
//! Typed wrappers around native text, integer, float and boolean values.
//!
//! Every kind comes in three flavors that share one generic type,
//! [`Scalar<T, F>`]:
//!
//! | Flavor        | Transformations                                  |
//! |---------------|--------------------------------------------------|
//! | [`Immutable`] | return a new wrapper, original untouched         |
//! | [`Mutable`]   | rewrite the value and return the same handle     |
//! | [`Readonly`]  | none, only accessors, comparisons, conversions   |
//!
//! Transformations come from [`TextTransform`], [`NumericTransform`] and
//! [`BooleanTransform`]; bring them into scope with the [`prelude`].
//!
//! ```rust,ignore
//! use datakind_scalar::prelude::*;
//!
//! let price = ImmutableFloat::from_float(1234.5);
//! let total = price.multiply(2)?;
//! assert_eq!(total.format(&NumberFormat::en()), "2,469.00");
//!
//! let four = ReadonlyInteger::from_integer(4);
//! assert!(four.to_boolean().is_true());
//! ```

mod boolean;
mod float;
pub mod format;
mod integer;
pub mod numeric;
mod positive;
mod scalar;
pub mod text;
mod timestamp;

pub use boolean::BooleanTransform;
pub use format::{NumberFormat, NumberFormatter};
pub use numeric::{Number, NumericTransform};
pub use positive::PositiveInteger;
pub use scalar::{Flavor, Immutable, Mutable, Readonly, Scalar};
pub use text::{MAX_TEXT_LENGTH, TextTransform};
pub use timestamp::{TIMESTAMP_FORMAT, Timestamp};

pub type ImmutableText = Scalar<String, Immutable>;
pub type MutableText = Scalar<String, Mutable>;
pub type ReadonlyText = Scalar<String, Readonly>;

pub type ImmutableInteger = Scalar<i64, Immutable>;
pub type MutableInteger = Scalar<i64, Mutable>;
pub type ReadonlyInteger = Scalar<i64, Readonly>;

pub type ImmutableFloat = Scalar<f64, Immutable>;
pub type MutableFloat = Scalar<f64, Mutable>;
pub type ReadonlyFloat = Scalar<f64, Readonly>;

pub type ImmutableBoolean = Scalar<bool, Immutable>;
pub type MutableBoolean = Scalar<bool, Mutable>;
pub type ReadonlyBoolean = Scalar<bool, Readonly>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        BooleanTransform, ImmutableBoolean, ImmutableFloat, ImmutableInteger, ImmutableText,
        MutableBoolean, MutableFloat, MutableInteger, MutableText, NumberFormat, NumberFormatter,
        NumericTransform, PositiveInteger, ReadonlyBoolean, ReadonlyFloat, ReadonlyInteger,
        ReadonlyText, Scalar, TextTransform, Timestamp,
    };
    pub use datakind_error::{DataError, Result};
}
