//! Profile gateway adapter

use crate::backend::client::BackendClient;
use crate::backend::protocol::{MessageResponse, NicknameRequest, PasswordRequest};
use async_trait::async_trait;
use recap_application::{GatewayError, ProfileGateway};
use std::sync::Arc;

/// [`ProfileGateway`] implementation over the backend HTTP API
pub struct HttpProfileGateway {
    client: Arc<BackendClient>,
}

impl HttpProfileGateway {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ProfileGateway for HttpProfileGateway {
    async fn update_nickname(&self, nickname: &str) -> Result<String, GatewayError> {
        let response: MessageResponse = self
            .client
            .post_json("/update_nickname", &NicknameRequest { nickname })
            .await?;
        Ok(response.message)
    }

    async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<String, GatewayError> {
        let response: MessageResponse = self
            .client
            .post_json(
                "/update_password",
                &PasswordRequest {
                    current_password,
                    new_password,
                },
            )
            .await?;
        Ok(response.message)
    }
}
