//! Entity collection
//!
//! Value objects keyed by their positive id, in insertion order. The
//! collection carries one read cursor for sequential traversal:
//!
//! ```rust,ignore
//! users.rewind();
//! while let Some(user) = users.current() {
//!     // ...
//!     users.next();
//! }
//! ```
//!
//! There is exactly one cursor per collection, so two interleaved traversals
//! through it see each other's moves. Use [`EntityCollection::iter`] for an
//! independent borrowing pass.

use datakind_entity::{Identifiable, JsonSerializable};
use datakind_error::{DataError, Result};
use datakind_scalar::PositiveInteger;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, trace};

type InternalMap<V> = IndexMap<i64, V>;

/// Unique-by-id store with a movable cursor.
#[derive(Debug, Clone)]
pub struct EntityCollection<V> {
    entries: InternalMap<V>,
    /// Position of the cursor; `None` once it moved before the start
    cursor: Option<usize>,
}

impl<V> Default for EntityCollection<V> {
    fn default() -> Self {
        Self {
            entries: InternalMap::new(),
            cursor: Some(0),
        }
    }
}

impl<V: Identifiable> EntityCollection<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a collection from `entities` in order; fails like [`add`](Self::add)
    pub fn from_entities(entities: impl IntoIterator<Item = V>) -> Result<Self> {
        let mut collection = Self::new();
        for entity in entities {
            collection.add(entity)?;
        }
        Ok(collection)
    }

    // ==================== Mutation ====================

    /// Fails with `NonPositiveInteger` for an invalid id and `DuplicateEntry`
    /// when the id is already stored
    pub fn add(&mut self, entity: V) -> Result<&mut Self> {
        let id = PositiveInteger::named("id", entity.id())?.get();
        if self.entries.contains_key(&id) {
            return Err(DataError::duplicate_entry(id));
        }
        self.entries.insert(id, entity);
        trace!(id, count = self.entries.len(), "entity added");
        Ok(self)
    }

    /// Removes the entity and moves the cursor to the one before it, or to
    /// the start when the first entity was removed
    pub fn remove(&mut self, id: i64) -> Result<V> {
        let id = PositiveInteger::named("id", id)?.get();
        let (index, _, entity) = self
            .entries
            .shift_remove_full(&id)
            .ok_or_else(|| DataError::not_found(id))?;
        self.cursor = Some(index.saturating_sub(1));
        debug!(id, count = self.entries.len(), "entity removed");
        Ok(entity)
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = Some(0);
    }

    // ==================== Lookup ====================

    /// Fails with `NonPositiveInteger` for an invalid id and `NotFound` when
    /// nothing is stored under it
    pub fn get(&self, id: i64) -> Result<&V> {
        let id = PositiveInteger::named("id", id)?.get();
        self.entries.get(&id).ok_or_else(|| DataError::not_found(id))
    }

    pub fn get_mut(&mut self, id: i64) -> Result<&mut V> {
        let id = PositiveInteger::named("id", id)?.get();
        self.entries
            .get_mut(&id)
            .ok_or_else(|| DataError::not_found(id))
    }

    /// Fails with `NonPositiveInteger` for an invalid id
    pub fn has(&self, id: i64) -> Result<bool> {
        let id = PositiveInteger::named("id", id)?.get();
        Ok(self.entries.contains_key(&id))
    }
}

impl<V> EntityCollection<V> {
    #[inline]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids in insertion order
    pub fn ids(&self) -> Vec<i64> {
        self.entries.keys().copied().collect()
    }

    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(|(_, v)| v)
    }

    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(|(_, v)| v)
    }

    /// Borrowing pass in insertion order; leaves the cursor untouched
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            inner: self.entries.values(),
        }
    }

    // ==================== Cursor ====================

    pub fn rewind(&mut self) {
        self.cursor = Some(0);
    }

    pub fn valid(&self) -> bool {
        self.position().is_some()
    }

    /// Entity under the cursor
    pub fn current(&self) -> Option<&V> {
        self.position()
            .and_then(|index| self.entries.get_index(index))
            .map(|(_, v)| v)
    }

    /// Id under the cursor
    pub fn key(&self) -> Option<i64> {
        self.position()
            .and_then(|index| self.entries.get_index(index))
            .map(|(id, _)| *id)
    }

    /// Advances the cursor; past the end it stays invalid until rewound
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if let Some(index) = self.cursor {
            self.cursor = Some(index.saturating_add(1));
        }
    }

    /// Moves the cursor back; before the start it becomes invalid
    pub fn previous(&mut self) {
        self.cursor = self.cursor.and_then(|index| index.checked_sub(1));
    }

    fn position(&self) -> Option<usize> {
        self.cursor.filter(|index| *index < self.entries.len())
    }
}

impl<V: JsonSerializable> EntityCollection<V> {
    /// Entities as a JSON array, in insertion order
    pub fn to_json(&self) -> Result<Value> {
        self.iter()
            .map(JsonSerializable::to_json)
            .collect::<Result<Vec<_>>>()
            .map(Value::Array)
    }
}

impl<V: JsonSerializable> Serialize for EntityCollection<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json()
            .map_err(serde::ser::Error::custom)?
            .serialize(serializer)
    }
}

/// Borrowing iterator over an [`EntityCollection`].
#[derive(Debug, Clone)]
pub struct Iter<'a, V> {
    inner: indexmap::map::Values<'a, i64, V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<V> DoubleEndedIterator for Iter<'_, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<V> ExactSizeIterator for Iter<'_, V> {}

impl<'a, V> IntoIterator for &'a EntityCollection<V> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
