//! # Completion client abstraction
//!
//! Defines the [`CompletionClient`] trait and two implementations: [`GroqClient`] for
//! the hosted OpenAI-compatible chat endpoint and [`OllamaClient`] for a local Ollama
//! server. Transport-agnostic; used by marco-assistant.
//!
//! Both clients send the full message list on every request and extract a single
//! reply string. Failures surface as [`CompletionError`]; callers decide whether to
//! propagate or degrade.

use async_trait::async_trait;
use marco_core::ChatMessage;

mod config;
mod error;
mod groq;
mod ollama;

pub use config::{build_client, CompletionConfig, Provider};
pub use error::CompletionError;
pub use groq::GroqClient;
pub use ollama::OllamaClient;

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If 11 chars or fewer, returns "***" to avoid leaking any part of the key.
/// Exposed for tests and for callers who need to log API keys safely.
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() <= 11 {
        return "***".to_string();
    }
    let head: String = chars[..7].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}***{}", head, tail)
}

/// Completion client interface: request one reply for an ordered list of messages.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Sends the given messages (system prompt included by the caller) and returns
    /// the reply text. One request per call; no streaming, no retries.
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, CompletionError>;

    /// The model identifier requests are issued against.
    fn model(&self) -> &str;
}
