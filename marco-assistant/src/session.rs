//! One chat session: hidden full history, visible current exchanges, auto-persisted.

use std::path::Path;

use chat_memory::{MemoryError, MemoryStore};
use completion_client::CompletionClient;
use marco_core::ChatMessage;
use tracing::{info, warn};

use crate::persona;

/// Prefix of the assistant reply fabricated when a completion request fails.
pub const ERROR_MARKER: &str = "❌ Erreur : ";

/// Every request replays the whole history; past this many messages each turn gets
/// noticeably more expensive, so the session starts warning.
const LARGE_HISTORY_WARN: usize = 200;

/// A live conversation with Marco.
///
/// The session owns two message lists. `history` is the complete log, loaded from
/// disk on open and rewritten to disk after every turn; it is what the model sees.
/// `visible` holds only the exchanges of the current session and starts empty on
/// every open, so a returning user gets a clean screen while Marco still remembers.
///
/// A session must be the only writer of its backing file while it is open. Two
/// sessions on the same file race with last-write-wins.
pub struct ChatSession {
    store: MemoryStore,
    client: Box<dyn CompletionClient>,
    system_prompt: String,
    history: Vec<ChatMessage>,
    visible: Vec<ChatMessage>,
}

impl ChatSession {
    /// Opens a session on the given store, loading any previously saved history.
    /// Uses Marco's built-in persona prompt.
    pub fn open(store: MemoryStore, client: Box<dyn CompletionClient>) -> Result<Self, MemoryError> {
        let history = store.load()?;
        info!(
            path = %store.path().display(),
            messages = history.len(),
            model = client.model(),
            "chat session opened"
        );
        Ok(Self {
            store,
            client,
            system_prompt: persona::SYSTEM_PROMPT.to_string(),
            history,
            visible: Vec::new(),
        })
    }

    /// Replaces the persona prompt sent with every request.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Runs one turn: appends the user message, requests a completion over the full
    /// history (system prompt first), appends the reply, and saves the log.
    ///
    /// A failed completion never fails the turn. The error is converted into a reply
    /// starting with [`ERROR_MARKER`] and recorded like any other assistant message.
    /// Only a persistence failure is returned as an error, after the in-memory state
    /// was already updated.
    pub async fn append_turn(&mut self, user_message: &str) -> Result<String, MemoryError> {
        self.history.push(ChatMessage::user(user_message));

        let mut request = Vec::with_capacity(self.history.len() + 1);
        request.push(ChatMessage::system(self.system_prompt.as_str()));
        request.extend(self.history.iter().cloned());

        if request.len() > LARGE_HISTORY_WARN {
            warn!(
                messages = request.len(),
                "large history, every turn resends all of it"
            );
        }

        let reply = match self.client.complete(&request).await {
            Ok(text) => text,
            Err(err) => {
                warn!(error = %err, "completion failed, answering with error marker");
                format!("{ERROR_MARKER}{err}")
            }
        };

        self.history.push(ChatMessage::assistant(reply.clone()));
        self.visible.push(ChatMessage::user(user_message));
        self.visible.push(ChatMessage::assistant(reply.clone()));

        self.store.save(&self.history)?;
        Ok(reply)
    }

    /// Forgets everything: deletes the backing file and empties both message lists.
    pub fn clear(&mut self) -> Result<(), MemoryError> {
        self.store.clear()?;
        self.history.clear();
        self.visible.clear();
        Ok(())
    }

    /// The complete log, persisted and hidden.
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Only the exchanges of the current session.
    pub fn visible_messages(&self) -> &[ChatMessage] {
        &self.visible
    }

    /// Completed user/assistant exchanges in the full log.
    pub fn turn_count(&self) -> u32 {
        (self.history.len() / 2) as u32
    }

    /// Path of the backing memory file.
    pub fn memory_path(&self) -> &Path {
        self.store.path()
    }
}
