//! HTTP adapters for the summarizer backend.
//!
//! [`BackendClient`] owns the reqwest client and the error-envelope
//! handling; the thin adapter structs implement the application ports on
//! top of it.

mod client;
mod error;
mod gateway;
mod profile;
mod protocol;
mod sessions;

pub use client::BackendClient;
pub use error::BackendError;
pub use gateway::HttpSummarizerGateway;
pub use profile::HttpProfileGateway;
pub use sessions::HttpSessionStore;
