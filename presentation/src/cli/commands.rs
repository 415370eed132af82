//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for recap
#[derive(Parser, Debug)]
#[command(name = "recap")]
#[command(author, version, about = "Chat with a summarizer backend about videos, files, code, and images")]
#[command(long_about = r#"
recap is a terminal client for a summarizer backend. Point it at a YouTube
video, a document, a code file, or an image, then ask questions about the
content in an interactive chat.

Configuration files are loaded from (in priority order):
1. --config <path>   Explicit config file
2. ./recap.toml      Project-level config
3. ~/.config/recap/config.toml   Global config

Example:
  recap summarize https://youtu.be/dQw4w9WgXcQ
  recap ask "what happens at 2:00?" --video https://youtu.be/dQw4w9WgXcQ
  recap chat
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print assistant text exactly as received (no reflow)
    #[arg(long, global = true)]
    pub raw: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Backend base URL (overrides configuration)
    #[arg(long, value_name = "URL", global = true)]
    pub base_url: Option<String>,
}

/// Subcommands; `chat` is the default when none is given
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start interactive chat mode (default)
    Chat,

    /// Submit a YouTube video and show its summary options
    Summarize {
        /// The video URL
        url: String,
    },

    /// Ask a single question
    Ask {
        /// The question text
        question: String,

        /// Video the question refers to
        #[arg(long, value_name = "URL")]
        video: Option<String>,

        /// Stored session to continue
        #[arg(long, value_name = "ID")]
        session: Option<String>,
    },

    /// Upload a document for summarization
    File {
        /// Path of the document
        path: PathBuf,
    },

    /// Explain a code file ("-" reads from stdin)
    Code {
        /// Path of the code file, or "-" for stdin
        path: PathBuf,
    },

    /// Analyze an image
    Image {
        /// Path of the image file
        path: PathBuf,
    },

    /// List saved sessions, or show/delete one
    History {
        /// Print the transcript of one session
        #[arg(long, value_name = "ID")]
        show: Option<String>,

        /// Delete a session
        #[arg(long, value_name = "ID")]
        delete: Option<String>,
    },

    /// Change the display nickname
    Nickname {
        /// The new nickname
        name: String,
    },

    /// Change the account password
    Password {
        /// Current password
        #[arg(long)]
        current: String,

        /// New password
        #[arg(long)]
        new: String,

        /// New password again, for verification
        #[arg(long)]
        verify: String,
    },
}
