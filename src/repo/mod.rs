//! Record repositories: typed CRUD over one collection of the document.
//!
//! [`Repository<S, T>`] works the same for all four record kinds; what
//! differs per kind is the query surface, which lives in the sibling
//! modules as inherent impls on the concrete repository types.

pub mod order;
pub mod product;
pub mod supplier;

use std::marker::PhantomData;

use log::debug;

use crate::document::Record;
use crate::error::Result;
use crate::store::{DocumentStore, Mutation};

/// CRUD over one record collection.
///
/// Every call round-trips through the store: reads load the current
/// document, mutations run one load-mutate-save cycle. There is no
/// cache to invalidate, so repositories sharing a store always agree.
pub struct Repository<S, T> {
    store: S,
    record: PhantomData<T>,
}

impl<S: DocumentStore, T: Record> Repository<S, T> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            record: PhantomData,
        }
    }

    /// Every record of this kind, in document order.
    pub fn list(&self) -> Result<Vec<T>> {
        Ok(T::records(&self.store.load()?).to_vec())
    }

    /// The record with `id`. Absence is a normal result, not an error.
    pub fn get(&self, id: u32) -> Result<Option<T>> {
        Ok(T::records(&self.store.load()?)
            .iter()
            .find(|record| record.id() == id)
            .cloned())
    }

    /// Append `record` under a freshly assigned id and return that id.
    ///
    /// The id is the current collection maximum plus one, so deleting
    /// the highest record frees its id for the next create. Whatever id
    /// the caller put on `record` is overwritten.
    pub fn create(&self, record: T) -> Result<u32> {
        let id = self.store.update(|document| {
            let records = T::records_mut(document);
            let id = next_id(records);
            let mut record = record;
            record.set_id(id);
            records.push(record);
            Mutation::Commit(id)
        })?;
        debug!("created {} {}", T::KIND, id);
        Ok(id)
    }

    /// Overwrite the stored record carrying `record`'s id.
    ///
    /// Returns `false` without touching the store when no such record
    /// exists; the id itself is never changed by an update.
    pub fn update(&self, record: &T) -> Result<bool> {
        let updated = self.store.update(|document| {
            let slot = T::records_mut(document)
                .iter_mut()
                .find(|stored| stored.id() == record.id());
            match slot {
                Some(stored) => {
                    *stored = record.clone();
                    Mutation::Commit(true)
                }
                None => Mutation::Discard(false),
            }
        })?;
        if updated {
            debug!("updated {} {}", T::KIND, record.id());
        }
        Ok(updated)
    }

    /// Remove the record with `id`.
    ///
    /// Returns `false` without touching the store when no such record
    /// exists. Removal does not cascade; records elsewhere that point at
    /// `id` keep their now-dangling reference.
    pub fn delete(&self, id: u32) -> Result<bool> {
        let deleted = self.store.update(|document| {
            let records = T::records_mut(document);
            match records.iter().position(|record| record.id() == id) {
                Some(at) => {
                    records.remove(at);
                    Mutation::Commit(true)
                }
                None => Mutation::Discard(false),
            }
        })?;
        if deleted {
            debug!("deleted {} {}", T::KIND, id);
        }
        Ok(deleted)
    }
}

fn next_id<T: Record>(records: &[T]) -> u32 {
    // The file is open to external editors, so the current maximum may
    // already sit at the type limit; saturate rather than wrap to 0.
    records
        .iter()
        .map(Record::id)
        .max()
        .unwrap_or(0)
        .saturating_add(1)
}
