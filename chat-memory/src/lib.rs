//! Chat-memory crate: JSON-file persistence for conversation logs.
//!
//! ## Modules
//!
//! - [`error`] – Memory error types
//! - [`document`] – MemoryDocument (the persisted JSON schema)
//! - [`store`] – MemoryStore (load / save / clear on one backing file)

mod document;
mod error;
mod store;

pub use document::MemoryDocument;
pub use error::MemoryError;
pub use store::{generate_traveler_id, MemoryStore};
