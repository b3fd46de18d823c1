//! FIFO queue of text elements.

use datakind_error::Result;
use datakind_scalar::{ImmutableText, PositiveInteger};
use serde::Serialize;
use tracing::trace;

use crate::bounded::{BoundedList, text_element};

/// First in, first out. Capacity is enforced on push the same way as for
/// [`Stack`](crate::Stack).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Queue {
    list: BoundedList<ImmutableText>,
}

impl Queue {
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

    /// Enqueues `items` in order, so the first one is served first
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

    pub fn push(&mut self, value: impl Into<String>) -> Result<&mut Self> {
        let element = text_element(value.into())?;
        self.list.push_back(element)?;
        trace!(len = self.list.len(), "queue push");
        Ok(self)
    }

    /// Removes the oldest element
    pub fn pop(&mut self) -> Option<ImmutableText> {
        self.list.pop_front()
    }

    pub fn peek(&self) -> Option<&ImmutableText> {
        self.list.front()
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

    /// Oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &ImmutableText> + ExactSizeIterator {
        self.list.iter()
    }

    pub fn to_vec(&self) -> Vec<ImmutableText> {
        self.list.to_vec()
    }
}
