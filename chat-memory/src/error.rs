//! Memory error types.
//!
//! Used by [`crate::MemoryStore`] and callers of the persistence API. A missing
//! backing file is not an error (load returns an empty log); a malformed file or a
//! failed read/write is, and propagates with the offending path attached.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when loading, saving, or clearing a conversation log.
#[derive(Error, Debug)]
pub enum MemoryError {
    #[error("I/O error on memory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed memory file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize memory document: {0}")]
    Serialize(#[from] serde_json::Error),
}
