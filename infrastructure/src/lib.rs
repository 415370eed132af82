//! Infrastructure layer for recap
//!
//! Adapters for the application-layer ports: the reqwest-based backend
//! client, figment configuration loading, and the JSONL conversation
//! transcript logger.

pub mod backend;
pub mod config;
pub mod logging;

// Re-export commonly used types
pub use backend::{
    BackendClient, BackendError, HttpProfileGateway, HttpSessionStore, HttpSummarizerGateway,
};
pub use config::{ConfigLoader, FileConfig};
pub use logging::JsonlConversationLogger;
