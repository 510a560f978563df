//! # Warehouse Facade
//!
//! The single entry point for embedding the store: one [`Warehouse`]
//! owns a repository per record kind, all sharing one store.
//!
//! ## Role
//!
//! The facade wires things together and nothing more:
//! - **Construction**: opens or adopts a store and hands out repositories
//! - **No business logic**: CRUD and queries live on the repositories
//! - **No presentation**: it returns data structures, never strings
//!
//! ## Generic Over DocumentStore
//!
//! `Warehouse<S: DocumentStore>` works with any store:
//! - Production: `Warehouse<FileStore>` via [`Warehouse::open`]
//! - Testing: `Warehouse<MemoryStore>` via [`Warehouse::new`]
//!
//! so everything above the storage layer is testable without a
//! filesystem.

use std::path::PathBuf;

use crate::document::AuditReport;
use crate::error::Result;
use crate::model::{Category, Order, Product, Supplier};
use crate::repo::Repository;
use crate::store::fs::FileStore;
use crate::store::DocumentStore;

/// One repository per record kind, over a shared store.
pub struct Warehouse<S: DocumentStore> {
    store: S,
    categories: Repository<S, Category>,
    products: Repository<S, Product>,
    suppliers: Repository<S, Supplier>,
    orders: Repository<S, Order>,
}

impl Warehouse<FileStore> {
    /// Open the document file at `path`, writing the empty skeleton
    /// first when the file is missing or zero-length.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let store = FileStore::new(path);
        store.ensure_initialized()?;
        Ok(Self::new(store))
    }
}

impl<S: DocumentStore + Clone> Warehouse<S> {
    /// Build the facade over an existing store. Clones of a store share
    /// its backing document, so all four repositories observe the same
    /// data.
    pub fn new(store: S) -> Self {
        Self {
            categories: Repository::new(store.clone()),
            products: Repository::new(store.clone()),
            suppliers: Repository::new(store.clone()),
            orders: Repository::new(store.clone()),
            store,
        }
    }
}

impl<S: DocumentStore> Warehouse<S> {
    pub fn categories(&self) -> &Repository<S, Category> {
        &self.categories
    }

    pub fn products(&self) -> &Repository<S, Product> {
        &self.products
    }

    pub fn suppliers(&self) -> &Repository<S, Supplier> {
        &self.suppliers
    }

    pub fn orders(&self) -> &Repository<S, Order> {
        &self.orders
    }

    /// Consistency report over the current document: duplicate ids and
    /// dangling references. Reporting only, nothing is repaired.
    pub fn audit(&self) -> Result<AuditReport> {
        Ok(self.store.load()?.audit())
    }
}

pub use crate::document::DanglingRef;
pub use crate::repo::product::{ProductOverview, ProductSortField, SortDirection};
