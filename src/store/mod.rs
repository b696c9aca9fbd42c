//! In-memory record store
//!
//! One append-only `Collection` per resource kind. State lives for the life
//! of the `Store` value; nothing is persisted. The store is owned by the
//! HTTP state and passed in explicitly, so each test can build its own.

mod collection;
mod errors;
mod record;

pub use collection::Collection;
pub use errors::{StoreError, StoreResult};
pub use record::{Record, RecordId};

use crate::resource::ResourceKind;

/// Collections for every resource kind
#[derive(Debug)]
pub struct Store {
    users: Collection,
    books: Collection,
    reviews: Collection,
}

impl Store {
    pub fn new() -> Self {
        Self {
            users: Collection::new(ResourceKind::User.collection_name()),
            books: Collection::new(ResourceKind::Book.collection_name()),
            reviews: Collection::new(ResourceKind::Review.collection_name()),
        }
    }

    /// Collection holding records of `kind`
    pub fn collection(&self, kind: ResourceKind) -> &Collection {
        match kind {
            ResourceKind::User => &self.users,
            ResourceKind::Book => &self.books,
            ResourceKind::Review => &self.reviews,
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
