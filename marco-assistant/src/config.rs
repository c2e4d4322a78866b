//! Assistant config: memory file locations, persona overrides, logging. Loaded from env.

use std::env;
use std::path::PathBuf;

use anyhow::Result;
use chat_memory::MemoryStore;

use crate::persona;

/// Where the assistant keeps its memory and its log, plus optional persona overrides.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// MEMORY_FILE; backing file in shared mode
    pub memory_file: PathBuf,
    /// MEMORY_DIR; directory holding one file per traveler
    pub memory_dir: PathBuf,
    /// TRAVELER_ID; when set, memory lives in `{memory_dir}/{traveler_id}.json`
    pub traveler_id: Option<String>,
    /// SYSTEM_PROMPT; replaces Marco's built-in persona prompt when set
    pub system_prompt: Option<String>,
    /// THINKING_MESSAGE; shown while a completion is in flight
    pub thinking_message: String,
    /// LOG_FILE
    pub log_file: String,
}

impl AssistantConfig {
    /// Load from environment variables. `traveler` overrides TRAVELER_ID if provided.
    pub fn load(traveler: Option<String>) -> Result<Self> {
        let memory_file = env::var("MEMORY_FILE")
            .unwrap_or_else(|_| "chat_memory.json".to_string())
            .into();
        let memory_dir = env::var("MEMORY_DIR")
            .unwrap_or_else(|_| "memories".to_string())
            .into();
        let traveler_id = traveler.or_else(|| env::var("TRAVELER_ID").ok());
        let system_prompt = env::var("SYSTEM_PROMPT")
            .ok()
            .filter(|s| !s.trim().is_empty());
        let thinking_message = env::var("THINKING_MESSAGE")
            .unwrap_or_else(|_| persona::THINKING_MESSAGE.to_string());
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| "logs/marco.log".to_string());

        Ok(Self {
            memory_file,
            memory_dir,
            traveler_id,
            system_prompt,
            thinking_message,
            log_file,
        })
    }

    /// The store matching this config: per-traveler when a traveler id is set,
    /// otherwise the shared file.
    pub fn memory_store(&self) -> MemoryStore {
        match &self.traveler_id {
            Some(id) => MemoryStore::for_traveler(&self.memory_dir, id),
            None => MemoryStore::at_path(&self.memory_file),
        }
    }
}
