//! User profile port
//!
//! Nickname and password updates go to the backend; both return a
//! confirmation message on success.

use crate::ports::summarizer_gateway::GatewayError;
use async_trait::async_trait;

/// Gateway for profile updates
#[async_trait]
pub trait ProfileGateway: Send + Sync {
    /// Change the display nickname, returning the backend's confirmation.
    async fn update_nickname(&self, nickname: &str) -> Result<String, GatewayError>;

    /// Change the password. The current password is verified server-side.
    async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
    ) -> Result<String, GatewayError>;
}
