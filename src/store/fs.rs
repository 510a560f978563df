use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use log::debug;
use once_cell::sync::Lazy;
use uuid::Uuid;

use super::{DocumentStore, Mutation};
use crate::document::Document;
use crate::error::{Result, StoreError};

// One gate per backing file keeps load-mutate-save cycles from
// interleaving. Keyed by the configured path, not the canonical one,
// so two spellings of the same file are not serialized against each
// other.
static WRITE_GATES: Lazy<Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

fn write_gate(path: &Path) -> Arc<Mutex<()>> {
    let mut gates = WRITE_GATES.lock().unwrap_or_else(|e| e.into_inner());
    // Gates nothing holds anymore are swept on each lookup, so the
    // registry does not grow with every path ever opened. A gate with
    // a cycle in flight always has a second holder and survives.
    gates.retain(|_, gate| Arc::strong_count(gate) > 1);
    gates.entry(path.to_path_buf()).or_default().clone()
}

/// Keeps the document in a single JSON file.
///
/// Every load parses the whole file and every save rewrites it, so the
/// file is the only state; nothing is cached between calls. Clones
/// point at the same path and share its write gate.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    // A zero-length file counts as uninitialized; an interrupted first
    // write can leave one behind.
    fn is_initialized(&self) -> bool {
        fs::metadata(&self.path).map(|m| m.len() > 0).unwrap_or(false)
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("document");
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl DocumentStore for FileStore {
    fn ensure_initialized(&self) -> Result<()> {
        // Init is a writer too: the missing-file check and the skeleton
        // write hold the gate, so a stale check cannot overwrite a
        // commit that landed in between.
        let gate = write_gate(&self.path);
        let _writing = gate.lock().unwrap_or_else(|e| e.into_inner());

        if self.is_initialized() {
            return Ok(());
        }
        if let Some(dir) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| StoreError::write(&self.path, e))?;
        }
        self.save(&Document::default())?;
        debug!("wrote skeleton document to {}", self.path.display());
        Ok(())
    }

    fn load(&self) -> Result<Document> {
        let content =
            fs::read_to_string(&self.path).map_err(|e| StoreError::read(&self.path, e))?;
        serde_json::from_str(&content).map_err(|e| StoreError::corrupt(&self.path, e))
    }

    fn save(&self, document: &Document) -> Result<()> {
        let content = serde_json::to_string_pretty(document)
            .map_err(|e| StoreError::write(&self.path, io::Error::other(e)))?;

        // Atomic write: a crash mid-save leaves the old file intact, and
        // readers never observe a half-written document.
        let tmp_path = self.tmp_path();
        match fs::write(&tmp_path, content).and_then(|()| fs::rename(&tmp_path, &self.path)) {
            Ok(()) => Ok(()),
            Err(e) => {
                // The tmp sibling must not outlive a failed save.
                let _ = fs::remove_file(&tmp_path);
                Err(StoreError::write(&self.path, e))
            }
        }
    }

    fn update<R>(&self, apply: impl FnOnce(&mut Document) -> Mutation<R>) -> Result<R> {
        let gate = write_gate(&self.path);
        let _writing = gate.lock().unwrap_or_else(|e| e.into_inner());

        let mut document = self.load()?;
        match apply(&mut document) {
            Mutation::Commit(value) => {
                self.save(&document)?;
                Ok(value)
            }
            Mutation::Discard(value) => Ok(value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dropped_gates_are_evicted_from_the_registry() {
        let first = write_gate(Path::new("gate-sweep-first.json"));
        drop(first);

        // Fetching any gate sweeps entries nothing else holds.
        let _second = write_gate(Path::new("gate-sweep-second.json"));

        let gates = WRITE_GATES.lock().unwrap_or_else(|e| e.into_inner());
        assert!(!gates.contains_key(Path::new("gate-sweep-first.json")));
        assert!(gates.contains_key(Path::new("gate-sweep-second.json")));
    }
}
