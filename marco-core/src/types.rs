//! Core chat types: message role and chat message.

use serde::{Deserialize, Serialize};

/// Role of a chat message, one-to-one with the completion API `role` values.
///
/// The persisted conversation log only ever contains `User` and `Assistant` entries;
/// `System` exists for the fixed instruction message prepended to completion requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System instruction (API `role: "system"`).
    System,
    /// Message sent by the user (API `role: "user"`).
    User,
    /// Reply from the assistant (API `role: "assistant"`).
    Assistant,
}

/// A single chat message, one-to-one with one element of the completion API `messages`
/// array and with one entry of the persisted conversation log. Immutable once created;
/// ordering in a log is chronological and append-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}
