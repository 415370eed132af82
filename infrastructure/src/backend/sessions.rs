//! Session store adapter

use crate::backend::client::BackendClient;
use crate::backend::protocol::{SaveSessionRequest, SessionMessagesResponse, SuccessResponse};
use async_trait::async_trait;
use recap_application::{GatewayError, SessionStore};
use recap_domain::{ChatMessage, SessionSummary};
use std::sync::Arc;

/// [`SessionStore`] implementation over the backend HTTP API
pub struct HttpSessionStore {
    client: Arc<BackendClient>,
}

impl HttpSessionStore {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

/// The save/delete endpoints signal failure with `success: false` even when
/// no error message is attached.
fn ensure_success(response: SuccessResponse, action: &str) -> Result<(), GatewayError> {
    if response.success {
        Ok(())
    } else {
        Err(GatewayError::Backend(format!(
            "The backend could not {action} the session"
        )))
    }
}

#[async_trait]
impl SessionStore for HttpSessionStore {
    async fn save_session(
        &self,
        date: &str,
        title: &str,
        description: &str,
    ) -> Result<(), GatewayError> {
        let response: SuccessResponse = self
            .client
            .post_json(
                "/save-chat-session",
                &SaveSessionRequest {
                    date,
                    title,
                    description,
                },
            )
            .await?;
        ensure_success(response, "save")
    }

    async fn history(&self) -> Result<Vec<SessionSummary>, GatewayError> {
        Ok(self.client.get_json("/get-chat-history").await?)
    }

    async fn session_messages(&self, id: &str) -> Result<Vec<ChatMessage>, GatewayError> {
        let response: SessionMessagesResponse = self
            .client
            .get_json(&format!("/chat-session/{id}"))
            .await?;
        Ok(response.messages)
    }

    async fn delete_session(&self, id: &str) -> Result<(), GatewayError> {
        let response: SuccessResponse = self
            .client
            .delete_json(&format!("/delete-chat-session/{id}"))
            .await?;
        ensure_success(response, "delete")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_success_passes_true() {
        assert!(ensure_success(SuccessResponse { success: true }, "save").is_ok());
    }

    #[test]
    fn test_ensure_success_rejects_false() {
        let result = ensure_success(SuccessResponse { success: false }, "delete");
        match result {
            Err(GatewayError::Backend(message)) => {
                assert!(message.contains("delete"));
            }
            other => panic!("Expected Backend error, got {other:?}"),
        }
    }
}
