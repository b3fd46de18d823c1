//! # datakind-collection
//!
//! Linear and keyed collections built on the datakind scalars and value
//! objects.
//!
//! - [`Stack`] and [`Queue`]: text elements over a capacity-limited
//!   [`BoundedList`]
//! - [`EntityCollection`]: value objects unique by id, with a single cursor
//! - [`PaginatedCollection`]: one page of entities plus fixed page counters

mod bounded;
mod entity_collection;
pub mod paginated;
mod queue;
mod stack;

pub use bounded::BoundedList;
pub use entity_collection::{EntityCollection, Iter};
pub use paginated::{PageMeta, PageRequest, PaginatedCollection, SortDescriptor, SortDirection};
pub use queue::Queue;
pub use stack::Stack;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        BoundedList, EntityCollection, PageMeta, PageRequest, PaginatedCollection, Queue,
        SortDescriptor, SortDirection, Stack,
    };
    pub use datakind_error::{DataError, Result};
}
