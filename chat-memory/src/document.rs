//! The persisted JSON document wrapping a conversation log.

use chrono::{DateTime, Utc};
use marco_core::ChatMessage;
use serde::{Deserialize, Serialize};

/// The on-disk shape of one conversation memory file.
///
/// `history` is always the complete conversation log at write time; the file is fully
/// overwritten on every save, never appended to. `turn_count` is derived from the
/// history (one turn = user message + assistant reply). `owner_id` is present only for
/// per-traveler memory files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryDocument {
    pub last_updated: DateTime<Utc>,
    #[serde(default)]
    pub turn_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    pub history: Vec<ChatMessage>,
}

impl MemoryDocument {
    /// Builds a document for the given log with `last_updated` = now and the turn
    /// count derived from the history length.
    pub fn new(history: Vec<ChatMessage>, owner_id: Option<String>) -> Self {
        let turn_count = (history.len() / 2) as u32;
        Self {
            last_updated: Utc::now(),
            turn_count,
            owner_id,
            history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: Turn count is derived as history length / 2.**
    #[test]
    fn turn_count_derived_from_history() {
        let history = vec![
            ChatMessage::user("a"),
            ChatMessage::assistant("b"),
            ChatMessage::user("c"),
            ChatMessage::assistant("d"),
        ];
        let doc = MemoryDocument::new(history, None);
        assert_eq!(doc.turn_count, 2);
    }

    /// **Test: owner_id is omitted from JSON when None and kept when Some.**
    #[test]
    fn owner_id_serialization() {
        let shared = MemoryDocument::new(vec![], None);
        let json = serde_json::to_string(&shared).unwrap();
        assert!(!json.contains("owner_id"));

        let owned = MemoryDocument::new(vec![], Some("traveler-1".to_string()));
        let json = serde_json::to_string(&owned).unwrap();
        assert!(json.contains(r#""owner_id":"traveler-1""#));
    }

    /// **Test: A document without turn_count still deserializes (older variant files).**
    #[test]
    fn turn_count_defaults_to_zero_when_absent() {
        let json = r#"{"last_updated":"2024-05-01T12:00:00Z","history":[]}"#;
        let doc: MemoryDocument = serde_json::from_str(json).unwrap();
        assert_eq!(doc.turn_count, 0);
        assert!(doc.history.is_empty());
    }
}
