//! Error types for the backend adapter

use recap_application::GatewayError;
use thiserror::Error;

/// Result type alias for backend operations
pub type Result<T> = std::result::Result<T, BackendError>;

/// Errors that can occur when talking to the summarizer backend
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend reported a failure in its JSON body, with or without a
    /// 2xx status — the `{"error": ...}` envelope.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error("HTTP error {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl From<BackendError> for GatewayError {
    fn from(error: BackendError) -> Self {
        match error {
            BackendError::Request(e) => {
                if e.is_timeout() {
                    GatewayError::Timeout
                } else {
                    GatewayError::Connection(e.to_string())
                }
            }
            BackendError::Api { message, .. } => GatewayError::Backend(message),
            BackendError::Http { status, body } => GatewayError::Http {
                status,
                message: body,
            },
            BackendError::Decode(message) => GatewayError::InvalidResponse(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_maps_to_backend_message() {
        let error = BackendError::Api {
            status: 400,
            message: "Invalid YouTube URL provided.".into(),
        };
        match GatewayError::from(error) {
            GatewayError::Backend(message) => {
                assert_eq!(message, "Invalid YouTube URL provided.");
            }
            other => panic!("Expected Backend, got {other:?}"),
        }
    }

    #[test]
    fn test_http_error_keeps_status() {
        let error = BackendError::Http {
            status: 503,
            body: "service unavailable".into(),
        };
        match GatewayError::from(error) {
            GatewayError::Http { status, .. } => assert_eq!(status, 503),
            other => panic!("Expected Http, got {other:?}"),
        }
    }
}
