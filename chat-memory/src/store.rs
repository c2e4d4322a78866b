//! MemoryStore: one conversation log persisted to one JSON file.

use std::fs;
use std::path::{Path, PathBuf};

use marco_core::ChatMessage;
use tracing::{debug, info};
use uuid::Uuid;

use crate::document::MemoryDocument;
use crate::error::MemoryError;

/// Generates a fresh traveler identifier for per-traveler memory files.
pub fn generate_traveler_id() -> String {
    Uuid::new_v4().to_string()
}

/// Persistence for one conversation log, backed by a single JSON file.
///
/// Every save rewrites the whole file with the complete log; there is no append mode,
/// no atomic rename, and no backup. A crash mid-write can leave a corrupt file, which
/// the next load reports as [`MemoryError::Malformed`]. The store assumes a single
/// writer per backing file at a time; concurrent writers race with last-write-wins.
/// The store never creates directories: saving into a missing directory fails with an
/// I/O error.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    path: PathBuf,
    owner_id: Option<String>,
}

impl MemoryStore {
    /// Store backed by a single shared file (e.g. `chat_memory.json`).
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            owner_id: None,
        }
    }

    /// Store backed by `{dir}/{traveler_id}.json`. Isolation between travelers is by
    /// path only; the traveler id is recorded as `owner_id` in the document.
    pub fn for_traveler(dir: impl AsRef<Path>, traveler_id: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{traveler_id}.json")),
            owner_id: Some(traveler_id.to_string()),
        }
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The traveler id recorded in saved documents, when in per-traveler mode.
    pub fn owner_id(&self) -> Option<&str> {
        self.owner_id.as_deref()
    }

    /// Whether the backing file currently exists.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Loads the conversation log from the backing file.
    ///
    /// A missing file is not an error: it yields an empty log. Unreadable or
    /// unparseable content propagates as an error with no recovery.
    pub fn load(&self) -> Result<Vec<ChatMessage>, MemoryError> {
        Ok(self
            .load_document()?
            .map(|doc| doc.history)
            .unwrap_or_default())
    }

    /// Loads the whole persisted document, or `None` when the file does not exist.
    pub fn load_document(&self) -> Result<Option<MemoryDocument>, MemoryError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no memory file, starting empty");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(|source| MemoryError::Io {
            path: self.path.clone(),
            source,
        })?;
        let doc: MemoryDocument =
            serde_json::from_str(&content).map_err(|source| MemoryError::Malformed {
                path: self.path.clone(),
                source,
            })?;
        debug!(
            path = %self.path.display(),
            messages = doc.history.len(),
            "memory loaded"
        );
        Ok(Some(doc))
    }

    /// Overwrites the backing file with the complete log, pretty-printed.
    pub fn save(&self, history: &[ChatMessage]) -> Result<(), MemoryError> {
        let doc = MemoryDocument::new(history.to_vec(), self.owner_id.clone());
        let json = serde_json::to_string_pretty(&doc)?;
        fs::write(&self.path, json).map_err(|source| MemoryError::Io {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            path = %self.path.display(),
            messages = history.len(),
            "memory saved"
        );
        Ok(())
    }

    /// Deletes the backing file if present. A missing file is a successful clear.
    pub fn clear(&self) -> Result<(), MemoryError> {
        if self.path.exists() {
            fs::remove_file(&self.path).map_err(|source| MemoryError::Io {
                path: self.path.clone(),
                source,
            })?;
            info!(path = %self.path.display(), "memory cleared");
        }
        Ok(())
    }
}
