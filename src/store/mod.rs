//! Persistence for the inventory document.
//!
//! A store owns exactly one [`Document`] and moves it in and out as a
//! whole; there is no partial read or partial write. [`fs::FileStore`]
//! keeps it in a single JSON file, [`memory::MemoryStore`] keeps it in
//! memory for tests and embedding.

pub mod fs;
pub mod memory;

use crate::document::Document;
use crate::error::Result;

/// What a mutation closure decided, carrying the caller's result value
/// either way.
pub enum Mutation<R> {
    /// Persist the modified document, then hand the value back.
    Commit(R),
    /// Leave the stored document exactly as it was.
    Discard(R),
}

/// Whole-document persistence.
pub trait DocumentStore {
    /// Make sure a document exists, writing the empty skeleton if not.
    fn ensure_initialized(&self) -> Result<()>;

    /// Read the current document.
    fn load(&self) -> Result<Document>;

    /// Replace the stored document.
    fn save(&self, document: &Document) -> Result<()>;

    /// Run one load-mutate-save cycle.
    ///
    /// The closure gets the freshly loaded document and decides whether
    /// its changes are kept. A [`Mutation::Discard`] outcome must leave
    /// the stored bytes untouched, not rewrite an equal document.
    /// Implementations serialize these cycles against each other so two
    /// concurrent mutations cannot trade away each other's writes.
    fn update<R>(&self, apply: impl FnOnce(&mut Document) -> Mutation<R>) -> Result<R>;
}
