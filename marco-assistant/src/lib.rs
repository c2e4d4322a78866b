//! # Marco travel assistant core
//!
//! Wires the persisted conversation memory and a completion client into a
//! [`ChatSession`], the one stateful object of the assistant. Presentation (CLI,
//! web, whatever) stays outside this crate and only calls the session.

use anyhow::Result;
use completion_client::CompletionConfig;

mod config;
pub mod persona;
mod session;

pub use config::AssistantConfig;
pub use session::{ChatSession, ERROR_MARKER};

/// Builds a ready-to-chat session: completion client from `completion`, memory store
/// from `config`, previous history loaded from disk, persona prompt applied.
pub fn build_session(config: &AssistantConfig, completion: &CompletionConfig) -> Result<ChatSession> {
    let client = completion_client::build_client(completion)?;
    let store = config.memory_store();
    let mut session = ChatSession::open(store, client)?;
    if let Some(prompt) = &config.system_prompt {
        session = session.with_system_prompt(prompt.clone());
    }
    Ok(session)
}
