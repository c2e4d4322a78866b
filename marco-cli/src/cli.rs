//! CLI for the marco binary.
//!
//! Parses subcommands and args; see `main.rs` for dispatch to the chat loop and the
//! memory commands.

use clap::{Parser, Subcommand};

/// Root CLI: holds a single subcommand. Parsed by `main.rs`.
#[derive(Parser)]
#[command(name = "marco")]
#[command(about = "Marco travel assistant: interactive chat with persisted conversation memory.")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Subcommands; all are handled in `main.rs`.
#[derive(Subcommand)]
pub enum Commands {
    /// Chat with Marco. Optional first message; then stdin line by line. Exit with Ctrl+C or /exit.
    Chat {
        /// Optional first message. If omitted, only the interactive loop runs.
        #[arg(value_name = "MESSAGE")]
        message: Option<String>,

        /// Traveler id: memory lives in MEMORY_DIR/{id}.json instead of the shared file.
        #[arg(short, long)]
        traveler: Option<String>,

        /// Generate a fresh traveler id and start with its empty memory.
        #[arg(long)]
        new_traveler: bool,

        /// Enable debug logging (RUST_LOG=debug).
        #[arg(short, long)]
        verbose: bool,
    },

    /// Print a summary of the persisted memory (file, turns, first messages).
    Memory {
        /// Traveler id whose memory to inspect. If omitted, the shared file.
        #[arg(short, long)]
        traveler: Option<String>,
    },

    /// Delete the persisted memory file.
    Clear {
        /// Traveler id whose memory to delete. If omitted, the shared file.
        #[arg(short, long)]
        traveler: Option<String>,
    },
}
