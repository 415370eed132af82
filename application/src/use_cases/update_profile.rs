//! Update Profile use case.
//!
//! Nickname and password changes. The password flow re-checks that the new
//! password and its confirmation match before anything is sent — the same
//! check the backend performs, done early so a typo costs no round trip.

use crate::ports::profile_gateway::ProfileGateway;
use crate::ports::summarizer_gateway::GatewayError;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Errors that can occur while updating the profile.
#[derive(Error, Debug)]
pub enum UpdateProfileError {
    #[error("Nickname cannot be empty")]
    EmptyNickname,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Passwords do not match. Please try again.")]
    PasswordMismatch,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Use case for profile updates.
pub struct UpdateProfileUseCase {
    gateway: Arc<dyn ProfileGateway>,
}

impl UpdateProfileUseCase {
    pub fn new(gateway: Arc<dyn ProfileGateway>) -> Self {
        Self { gateway }
    }

    /// Change the nickname, returning the backend's confirmation message.
    pub async fn update_nickname(&self, nickname: &str) -> Result<String, UpdateProfileError> {
        let nickname = nickname.trim();
        if nickname.is_empty() {
            return Err(UpdateProfileError::EmptyNickname);
        }

        let message = self.gateway.update_nickname(nickname).await?;
        info!(nickname, "Nickname updated");
        Ok(message)
    }

    /// Change the password. `verify_password` must equal `new_password`.
    pub async fn update_password(
        &self,
        current_password: &str,
        new_password: &str,
        verify_password: &str,
    ) -> Result<String, UpdateProfileError> {
        if new_password.is_empty() {
            return Err(UpdateProfileError::EmptyPassword);
        }
        if new_password != verify_password {
            return Err(UpdateProfileError::PasswordMismatch);
        }

        let message = self
            .gateway
            .update_password(current_password, new_password)
            .await?;
        info!("Password updated");
        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    #[derive(Default)]
    struct MockProfile {
        nicknames: Mutex<Vec<String>>,
        password_calls: Mutex<usize>,
    }

    #[async_trait]
    impl ProfileGateway for MockProfile {
        async fn update_nickname(&self, nickname: &str) -> Result<String, GatewayError> {
            self.nicknames.lock().unwrap().push(nickname.to_string());
            Ok("Nickname updated successfully!".to_string())
        }

        async fn update_password(
            &self,
            current_password: &str,
            _new_password: &str,
        ) -> Result<String, GatewayError> {
            *self.password_calls.lock().unwrap() += 1;
            if current_password == "right" {
                Ok("Password updated successfully!".to_string())
            } else {
                Err(GatewayError::Backend("Incorrect current password".into()))
            }
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_nickname_is_trimmed() {
        let gateway = Arc::new(MockProfile::default());
        let use_case = UpdateProfileUseCase::new(gateway.clone());

        let message = use_case.update_nickname("  ada  ").await.unwrap();
        assert_eq!(message, "Nickname updated successfully!");
        assert_eq!(gateway.nicknames.lock().unwrap().as_slice(), ["ada"]);
    }

    #[tokio::test]
    async fn test_blank_nickname_is_rejected() {
        let use_case = UpdateProfileUseCase::new(Arc::new(MockProfile::default()));
        let result = use_case.update_nickname("   ").await;
        assert!(matches!(result, Err(UpdateProfileError::EmptyNickname)));
    }

    #[tokio::test]
    async fn test_password_mismatch_never_reaches_gateway() {
        let gateway = Arc::new(MockProfile::default());
        let use_case = UpdateProfileUseCase::new(gateway.clone());

        let result = use_case.update_password("right", "new-one", "new-two").await;

        assert!(matches!(result, Err(UpdateProfileError::PasswordMismatch)));
        assert_eq!(*gateway.password_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_password_update_succeeds_when_matching() {
        let use_case = UpdateProfileUseCase::new(Arc::new(MockProfile::default()));
        let message = use_case
            .update_password("right", "new-one", "new-one")
            .await
            .unwrap();
        assert_eq!(message, "Password updated successfully!");
    }

    #[tokio::test]
    async fn test_wrong_current_password_is_a_backend_error() {
        let use_case = UpdateProfileUseCase::new(Arc::new(MockProfile::default()));
        let result = use_case.update_password("wrong", "new", "new").await;
        assert!(matches!(
            result,
            Err(UpdateProfileError::Gateway(GatewayError::Backend(_)))
        ));
    }
}
