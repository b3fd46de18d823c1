//! LIFO stack of text elements.

use datakind_error::Result;
use datakind_scalar::{ImmutableText, PositiveInteger};
use serde::Serialize;
use tracing::trace;

use crate::bounded::{BoundedList, text_element};

/// Last in, first out. Pushing past the capacity fails.
///
/// ```rust,ignore
/// let mut stack = Stack::new();
/// stack.push("a")?.push("b")?;
/// assert_eq!(stack.pop().unwrap().as_str(), "b");
/// assert_eq!(stack.peek().unwrap().as_str(), "a");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Stack {
    list: BoundedList<ImmutableText>,
}

impl Stack {
    pub const fn new() -> Self {
        Self {
            list: BoundedList::new(None),
        }
    }

    pub const fn with_capacity(capacity: PositiveInteger) -> Self {
        Self {
            list: BoundedList::new(Some(capacity)),
        }
    }

    /// Pushes `items` in order, so the last one ends on top
    pub fn from_items<I, S>(items: I, capacity: Option<PositiveInteger>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let items = items
            .into_iter()
            .map(|item| text_element(item.into()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self {
            list: BoundedList::from_vec(items, capacity)?,
        })
    }

    /// Fails with `EmptyInput` for blank text and `CapacityExceeded` when full
    pub fn push(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        let element = text_element(value.into())?;
        self.list.push_back(element)?;
        trace!(len = self.list.len(), "stack push");
        Ok(self)
    }

    pub fn pop(&mut self) -> Option<ImmutableText> {
        self.list.pop_back()
    }

    pub fn peek(&self) -> Option<&ImmutableText> {
        self.list.back()
    }

    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn capacity(&self) -> Option<PositiveInteger> {
        self.list.capacity()
    }

    pub fn is_full(&self) -> bool {
        self.list.is_full()
    }

    pub fn clear(&mut self) {
        self.list.clear();
    }

    /// Bottom to top
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ImmutableText> + ExactSizeIterator {
        self.list.iter()
    }

    /// Bottom to top
    pub fn to_vec(&self) -> Vec<ImmutableText> {
        self.list.to_vec()
    }
}
