//! # marco-core
//!
//! Core types for the Marco travel assistant: [`Role`], [`ChatMessage`], and tracing
//! initialization. Transport-agnostic; used by chat-memory, completion-client, and the
//! assistant crates.

pub mod logger;
pub mod types;

pub use logger::init_tracing;
pub use types::{ChatMessage, Role};
