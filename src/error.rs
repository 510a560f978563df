use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Everything that can go wrong below the transport layer.
///
/// "Record not found" is deliberately not here: the repositories report
/// absence through `Option` and `bool` results, and callers decide what
/// that means for them.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file exists but does not hold a well-formed document.
    #[error("corrupt document at {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The backing file could not be read.
    #[error("cannot read document at {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The document could not be written back.
    #[error("cannot write document at {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A query named a sort field the entity does not have.
    #[error("no sortable field {field:?} on {entity} records")]
    UnknownField {
        entity: &'static str,
        field: String,
    },
}

impl StoreError {
    pub(crate) fn corrupt(path: &Path, source: serde_json::Error) -> Self {
        Self::Corrupt {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        Self::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn unknown_field(entity: &'static str, field: &str) -> Self {
        Self::UnknownField {
            entity,
            field: field.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
