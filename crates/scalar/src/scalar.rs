//! The flavored scalar wrapper.
//!
//! A [`Scalar`] holds exactly one native value. Its flavor marker decides
//! which transformation traits apply:
//!
//! - [`Immutable`]: transformations return a new wrapper
//! - [`Mutable`]: transformations rewrite the held value and return the same handle
//! - [`Readonly`]: no transformations, only accessors, comparisons and conversions
//!
//! The kind of the held value never changes; converting to another kind goes
//! through an explicit `to_*` call that builds a new wrapper.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

mod sealed {
    pub trait Sealed {}
}

/// Marker for the mutability contract of a [`Scalar`].
///
/// Sealed: the three flavors below are the only ones.
pub trait Flavor: sealed::Sealed + 'static {
    /// Name used in `Debug` output
    const NAME: &'static str;
}

/// Transformations return a new wrapper; the original never changes.
#[derive(Debug)]
pub enum Immutable {}

/// Transformations overwrite the held value and return the same handle.
#[derive(Debug)]
pub enum Mutable {}

/// Construction and reads only.
#[derive(Debug)]
pub enum Readonly {}

impl sealed::Sealed for Immutable {}
impl sealed::Sealed for Mutable {}
impl sealed::Sealed for Readonly {}

impl Flavor for Immutable {
    const NAME: &'static str = "Immutable";
}

impl Flavor for Mutable {
    const NAME: &'static str = "Mutable";
}

impl Flavor for Readonly {
    const NAME: &'static str = "Readonly";
}

/// One native value plus the flavor that governs how it may change.
///
/// Serializes transparently as the native value.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct Scalar<T, F: Flavor> {
    pub(crate) value: T,
    #[serde(skip)]
    flavor: PhantomData<F>,
}

impl<T, F: Flavor> Scalar<T, F> {
    /// Wrap a native value
    pub const fn new(value: T) -> Self {
        Self {
            value,
            flavor: PhantomData,
        }
    }

    /// Unwrap the native value
    pub fn into_inner(self) -> T {
        self.value
    }

    /// Same value under another flavor
    pub fn into_flavor<G: Flavor>(self) -> Scalar<T, G> {
        Scalar::new(self.value)
    }
}

impl<T: Clone, F: Flavor> Scalar<T, F> {
    /// Copy of this value that can only be read
    pub fn to_readonly(&self) -> Scalar<T, Readonly> {
        Scalar::new(self.value.clone())
    }

    /// Copy of this value with value semantics
    pub fn to_immutable(&self) -> Scalar<T, Immutable> {
        Scalar::new(self.value.clone())
    }

    /// Copy of this value that can be changed in place
    pub fn to_mutable(&self) -> Scalar<T, Mutable> {
        Scalar::new(self.value.clone())
    }
}

// Manual impls: derives would demand the same bounds of the marker types.

impl<T: Clone, F: Flavor> Clone for Scalar<T, F> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<T: Copy, F: Flavor> Copy for Scalar<T, F> {}

impl<T: fmt::Debug, F: Flavor> fmt::Debug for Scalar<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple(F::NAME).field(&self.value).finish()
    }
}

impl<T: fmt::Display, F: Flavor> fmt::Display for Scalar<T, F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.value.fmt(f)
    }
}

impl<T: PartialEq, F: Flavor> PartialEq for Scalar<T, F> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq, F: Flavor> Eq for Scalar<T, F> {}

impl<T: PartialOrd, F: Flavor> PartialOrd for Scalar<T, F> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.value.partial_cmp(&other.value)
    }
}

impl<T: Ord, F: Flavor> Ord for Scalar<T, F> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T: Hash, F: Flavor> Hash for Scalar<T, F> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T: Default, F: Flavor> Default for Scalar<T, F> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
