//! Presentation layer for recap
//!
//! This crate contains the interactive chat REPL, console transcript
//! rendering, progress display, and CLI argument definitions.

pub mod chat;
pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, Command};
pub use output::console::{TranscriptView, notice};
pub use progress::reporter::{RequestSpinner, SimpleProgress};
