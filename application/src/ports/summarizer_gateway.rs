//! Summarizer backend port
//!
//! Defines the interface for talking to the summarizer backend API. The
//! HTTP adapter lives in the infrastructure layer.

use async_trait::async_trait;
use recap_domain::SummaryOptions;
use thiserror::Error;

/// Errors that can occur during backend gateway operations
#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP error {status}: {message}")]
    Http { status: u16, message: String },

    /// The backend answered 2xx but put an `error` field in the body.
    #[error("{0}")]
    Backend(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl GatewayError {
    /// Errors the user can fix by retrying (network trouble, 5xx).
    pub fn is_transient(&self) -> bool {
        match self {
            GatewayError::Connection(_) | GatewayError::Timeout => true,
            GatewayError::Http { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

/// An answered question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    /// The assistant's response text, unformatted.
    pub response: String,
    /// Session id assigned by the backend, present when a new stored
    /// session was created for this conversation.
    pub session_id: Option<String>,
}

/// Gateway to the summarizer backend
///
/// One method per backend operation; all content crosses as plain text or
/// raw bytes, never as markup.
#[async_trait]
pub trait SummarizerGateway: Send + Sync {
    /// Submit a YouTube link for processing and get the summary options.
    async fn process_video_link(&self, youtube_url: &str)
    -> Result<SummaryOptions, GatewayError>;

    /// Re-fetch the summary options for the video processed last.
    async fn video_summary_options(&self) -> Result<SummaryOptions, GatewayError>;

    /// Ask a question, optionally scoped to a video and a stored session.
    async fn ask_question(
        &self,
        question: &str,
        youtube_url: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Answer, GatewayError>;

    /// Upload a document for summarization. Follow-up questions go through
    /// [`ask_question`](Self::ask_question) afterwards.
    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> Result<(), GatewayError>;

    /// Submit a code block, returning the explanation.
    async fn summarize_code(&self, code: &str) -> Result<String, GatewayError>;

    /// Upload an image, returning the analysis.
    async fn analyze_image(&self, filename: &str, bytes: Vec<u8>)
    -> Result<String, GatewayError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_classification() {
        assert!(GatewayError::Timeout.is_transient());
        assert!(GatewayError::Connection("refused".into()).is_transient());
        assert!(
            GatewayError::Http {
                status: 503,
                message: "unavailable".into()
            }
            .is_transient()
        );
        assert!(
            !GatewayError::Http {
                status: 404,
                message: "not found".into()
            }
            .is_transient()
        );
        assert!(!GatewayError::Backend("Video not found.".into()).is_transient());
    }

    #[test]
    fn test_backend_error_displays_message_verbatim() {
        let error = GatewayError::Backend("Invalid YouTube URL provided.".into());
        assert_eq!(error.to_string(), "Invalid YouTube URL provided.");
    }
}
