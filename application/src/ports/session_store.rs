//! Session persistence port
//!
//! Chat sessions are stored by the backend, not locally; this port wraps
//! the save/list/load/delete endpoints.

use crate::ports::summarizer_gateway::GatewayError;
use async_trait::async_trait;
use recap_domain::{ChatMessage, SessionSummary};

/// Store for saved chat sessions
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Save the current conversation under a date/title/description row.
    async fn save_session(
        &self,
        date: &str,
        title: &str,
        description: &str,
    ) -> Result<(), GatewayError>;

    /// List all saved sessions, newest first as the backend returns them.
    async fn history(&self) -> Result<Vec<SessionSummary>, GatewayError>;

    /// Load the full transcript of a saved session.
    async fn session_messages(&self, id: &str) -> Result<Vec<ChatMessage>, GatewayError>;

    /// Delete a saved session.
    async fn delete_session(&self, id: &str) -> Result<(), GatewayError>;
}
