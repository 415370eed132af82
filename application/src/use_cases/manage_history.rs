//! Manage History use case.
//!
//! Thin orchestration over the [`SessionStore`] port: list saved sessions,
//! reopen one as a live [`ChatSession`], delete, and save.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::session_store::SessionStore;
use crate::ports::summarizer_gateway::GatewayError;
use recap_domain::{ChatSession, SessionSummary};
use std::sync::Arc;
use tracing::info;

/// Use case for working with saved chat sessions.
pub struct ManageHistoryUseCase {
    store: Arc<dyn SessionStore>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl ManageHistoryUseCase {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self {
            store,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// List all saved sessions.
    pub async fn list(&self) -> Result<Vec<SessionSummary>, GatewayError> {
        self.store.history().await
    }

    /// Reopen a saved session as a live conversation.
    pub async fn load(&self, id: &str) -> Result<ChatSession, GatewayError> {
        let messages = self.store.session_messages(id).await?;
        info!(id, turns = messages.len(), "Session loaded");
        Ok(ChatSession::resume(id, messages))
    }

    /// Delete a saved session.
    pub async fn delete(&self, id: &str) -> Result<(), GatewayError> {
        self.store.delete_session(id).await?;
        info!(id, "Session deleted");
        self.conversation_logger.log(ConversationEvent::new(
            "session_deleted",
            serde_json::json!({ "id": id }),
        ));
        Ok(())
    }

    /// Save the current conversation under a history row.
    pub async fn save(
        &self,
        date: &str,
        title: &str,
        description: &str,
    ) -> Result<(), GatewayError> {
        self.store.save_session(date, title, description).await?;
        info!(title, "Session saved");
        self.conversation_logger.log(ConversationEvent::new(
            "session_saved",
            serde_json::json!({ "date": date, "title": title, "description": description }),
        ));
        Ok(())
    }
}
