//! Binary for marco: interactive travel chat with JSON-file conversation memory.
//!
//! See `cli.rs` for the CLI definition. The chat loop keeps one [`ChatSession`] alive;
//! `memory` and `clear` work on the saved file without touching the completion API.

use anyhow::{Context, Result};
use chat_memory::{generate_traveler_id, MemoryStore};
use clap::Parser;
use completion_client::CompletionConfig;
use marco_assistant::{build_session, persona, AssistantConfig, ChatSession};
use std::io::{self, Write};
use tracing::info;

mod cli;
mod format;

use cli::{Cli, Commands};
use format::format_memory_summary;

/// Prints help message for interactive chat commands.
fn print_help() {
    println!("Available commands:");
    println!("  /help    - Show this help message");
    println!("  /clear   - Forget the whole conversation memory");
    println!("  /exit    - Exit the chat");
    println!("  /quit    - Exit the chat");
    println!("  Any other text will be sent to Marco.");
}

/// Runs one chat turn: shows the thinking line, sends `content`, prints the reply.
/// Completion failures come back as Marco's error-marker reply; only a failure to
/// persist the log returns an error.
async fn run_one_turn(session: &mut ChatSession, content: &str, thinking: &str) -> Result<()> {
    println!("{}", thinking);
    let reply = session.append_turn(content).await?;
    println!("{}", reply);
    Ok(())
}

/// Interactive chat loop: optional first message, then read lines from stdin until
/// EOF or /exit. Supports commands: /help, /clear, /exit, /quit.
async fn run_chat_loop(
    mut session: ChatSession,
    first_message: Option<String>,
    thinking: &str,
) -> Result<()> {
    println!("Marco Chat (type /help for commands, /exit to quit)");
    println!();
    println!("{}", persona::WELCOME_MESSAGE);
    println!();

    if let Some(m) = first_message {
        println!("> {}", m);
        run_one_turn(&mut session, &m, thinking).await?;
        println!();
    }

    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        let n = io::stdin().read_line(&mut line)?;
        if n == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match line {
            "/help" => {
                print_help();
                continue;
            }
            "/clear" => {
                session.clear()?;
                println!("🗑️ Mémoire effacée. On repart de zéro !");
                println!();
                continue;
            }
            "/exit" | "/quit" => {
                println!("Au revoir ! Bon voyage ! ✈️");
                break;
            }
            _ => {}
        }

        run_one_turn(&mut session, line, thinking).await?;
        println!();
    }
    Ok(())
}

/// Prints where the memory lives and what it holds.
fn print_memory_summary(store: &MemoryStore) -> Result<()> {
    println!("Memory file: {}", store.path().display());
    match store.load_document()? {
        Some(doc) => print!("{}", format_memory_summary(&doc)),
        None => println!("  (no saved memory)"),
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chat {
            message,
            traveler,
            new_traveler,
            verbose,
        } => {
            if verbose {
                std::env::set_var("RUST_LOG", "debug");
            }
            let traveler = if new_traveler {
                let id = generate_traveler_id();
                println!("New traveler id: {}", id);
                println!("(pass --traveler {} next time to resume this memory)", id);
                Some(id)
            } else {
                traveler
            };
            let config = AssistantConfig::load(traveler)?;
            marco_core::init_tracing(&config.log_file)?;
            if config.traveler_id.is_some() {
                std::fs::create_dir_all(&config.memory_dir).with_context(|| {
                    format!("Create memory dir {}", config.memory_dir.display())
                })?;
            }
            let completion = CompletionConfig::from_env()?;
            let session = build_session(&config, &completion)?;
            info!(
                memory_file = %session.memory_path().display(),
                "chat session ready"
            );
            run_chat_loop(session, message, &config.thinking_message).await?;
        }
        Commands::Memory { traveler } => {
            let config = AssistantConfig::load(traveler)?;
            print_memory_summary(&config.memory_store())?;
        }
        Commands::Clear { traveler } => {
            let config = AssistantConfig::load(traveler)?;
            let store = config.memory_store();
            if store.exists() {
                store.clear()?;
                println!("Memory cleared: {}", store.path().display());
            } else {
                println!("No memory to clear at {}", store.path().display());
            }
        }
    }

    Ok(())
}
