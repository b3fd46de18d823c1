//! Capacity-limited list shared by [`Stack`](crate::Stack) and
//! [`Queue`](crate::Queue).

use std::collections::VecDeque;

use datakind_error::{DataError, Result};
use datakind_scalar::{ImmutableText, PositiveInteger};
use serde::Serialize;
use tracing::debug;

/// Ordered list that never grows past its capacity, if one is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BoundedList<T> {
    items: VecDeque<T>,
    #[serde(skip)]
    capacity: Option<PositiveInteger>,
}

impl<T> BoundedList<T> {
    pub const fn new(capacity: Option<PositiveInteger>) -> Self {
        Self {
            items: VecDeque::new(),
            capacity,
        }
    }

    /// Fails with `CapacityExceeded` when `items` does not fit
    pub fn from_vec(items: Vec<T>, capacity: Option<PositiveInteger>) -> Result<Self> {
        if let Some(cap) = capacity.filter(|cap| items.len() > cap.as_usize()) {
            return Err(DataError::capacity_exceeded(cap.as_usize()));
        }
        Ok(Self {
            items: items.into(),
            capacity,
        })
    }

    /// Fails with `CapacityExceeded` when one more element would not fit
    pub fn ensure_room(&self) -> Result<()> {
        if self.is_full() {
            let capacity = self.capacity.map_or(usize::MAX, PositiveInteger::as_usize);
            debug!(capacity, "bounded list is full");
            return Err(DataError::capacity_exceeded(capacity));
        }
        Ok(())
    }

    pub fn push_back(&mut self, item: T) -> Result<()> {
        self.ensure_room()?;
        self.items.push_back(item);
        Ok(())
    }

    pub fn pop_back(&mut self) -> Option<T> {
        self.items.pop_back()
    }

    pub fn pop_front(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    pub fn front(&self) -> Option<&T> {
        self.items.front()
    }

    pub fn back(&self) -> Option<&T> {
        self.items.back()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> Option<PositiveInteger> {
        self.capacity
    }

    /// Always `false` for an unbounded list
    pub fn is_full(&self) -> bool {
        self.capacity
            .is_some_and(|cap| self.items.len() >= cap.as_usize())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Front to back
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> + ExactSizeIterator {
        self.items.iter()
    }
}

impl<T: Clone> BoundedList<T> {
    pub fn to_vec(&self) -> Vec<T> {
        self.items.iter().cloned().collect()
    }
}

impl<T> Default for BoundedList<T> {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Element check shared by stacks and queues: blank input is rejected, the
/// value is stored untrimmed.
pub(crate) fn text_element(value: String) -> Result<ImmutableText> {
    if value.trim().is_empty() {
        return Err(DataError::empty_input("value"));
    }
    Ok(ImmutableText::from_string(value))
}
