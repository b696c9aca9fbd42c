//! Append-only in-memory collection
//!
//! Ids come from a counter owned by the collection. The counter advance and
//! the append happen under the same write lock, so concurrent inserts never
//! share an id and ids stay dense.

use std::sync::RwLock;

use serde_json::{Map, Value};

use super::errors::{StoreError, StoreResult};
use super::record::{Record, RecordId};

#[derive(Debug, Default)]
struct CollectionInner {
    /// Id handed to the next insert
    next_id: RecordId,
    records: Vec<Record>,
}

/// One resource kind's sequence of records
#[derive(Debug)]
pub struct Collection {
    name: &'static str,
    inner: RwLock<CollectionInner>,
}

impl Collection {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            inner: RwLock::new(CollectionInner {
                next_id: 1,
                records: Vec::new(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Assign the next id to `payload`, append it, and return the stored record.
    pub fn append(&self, payload: Map<String, Value>) -> StoreResult<Record> {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| StoreError::Poisoned(self.name))?;

        let id = inner.next_id;
        let record = Record::new(id, payload);
        inner.records.push(record.clone());
        inner.next_id += 1;

        Ok(record)
    }

    /// Number of stored records
    pub fn len(&self) -> StoreResult<usize> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Poisoned(self.name))?;
        Ok(inner.records.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    /// Copy of all records in insertion order
    pub fn records(&self) -> StoreResult<Vec<Record>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| StoreError::Poisoned(self.name))?;
        Ok(inner.records.clone())
    }
}
