use std::sync::{Arc, Mutex};

use super::{DocumentStore, Mutation};
use crate::document::Document;
use crate::error::Result;

/// In-memory store for testing and embedding.
///
/// Holds the document behind `Arc<Mutex>` so clones observe the same
/// data, which is how the repositories of one facade share a store.
/// Nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    document: Arc<Mutex<Document>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing document instead of the empty skeleton.
    pub fn with_document(document: Document) -> Self {
        Self {
            document: Arc::new(Mutex::new(document)),
        }
    }
}

impl DocumentStore for MemoryStore {
    fn ensure_initialized(&self) -> Result<()> {
        Ok(())
    }

    fn load(&self) -> Result<Document> {
        Ok(self
            .document
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }

    fn save(&self, document: &Document) -> Result<()> {
        *self.document.lock().unwrap_or_else(|e| e.into_inner()) = document.clone();
        Ok(())
    }

    fn update<R>(&self, apply: impl FnOnce(&mut Document) -> Mutation<R>) -> Result<R> {
        // The lock is held across the whole cycle, mirroring the file
        // store's write gate.
        let mut stored = self.document.lock().unwrap_or_else(|e| e.into_inner());
        let mut draft = stored.clone();
        match apply(&mut draft) {
            Mutation::Commit(value) => {
                *stored = draft;
                Ok(value)
            }
            Mutation::Discard(value) => Ok(value),
        }
    }
}
