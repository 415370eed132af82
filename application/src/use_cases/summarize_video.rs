//! Summarize Video use case.
//!
//! Validates a YouTube link locally, submits it for processing, and returns
//! the summary options the backend offers. Validation happens before any
//! network traffic — a bad link never leaves the client.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::request_progress::RequestProgress;
use crate::ports::summarizer_gateway::{GatewayError, SummarizerGateway};
use recap_domain::{DomainError, SummaryOptions, extract_video_id, validate_video_url};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Shown while the backend downloads and summarizes the video.
const PROCESSING_LABEL: &str = "Processing video... This may take a few minutes.";

/// Errors that can occur while summarizing a video.
#[derive(Error, Debug)]
pub enum SummarizeVideoError {
    #[error("Please enter a YouTube URL")]
    MissingUrl,

    #[error("Please enter a valid YouTube URL")]
    InvalidUrl(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Use case for submitting a video and retrieving its summary options.
pub struct SummarizeVideoUseCase {
    gateway: Arc<dyn SummarizerGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SummarizeVideoUseCase {
    pub fn new(gateway: Arc<dyn SummarizerGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    /// Create with a conversation logger.
    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Validate the URL, process the video, and return the summary options.
    pub async fn execute(
        &self,
        youtube_url: &str,
        progress: &dyn RequestProgress,
    ) -> Result<SummaryOptions, SummarizeVideoError> {
        let url = validate_video_url(youtube_url).map_err(|e| match e {
            DomainError::EmptyInput => SummarizeVideoError::MissingUrl,
            _ => SummarizeVideoError::InvalidUrl(youtube_url.trim().to_string()),
        })?;

        debug!(video_id = extract_video_id(url), "Submitting video link");

        progress.on_start(PROCESSING_LABEL);
        let result = self.gateway.process_video_link(url).await;
        progress.on_finish();

        let options = result?;

        info!("Video processed, summary options received");
        self.conversation_logger.log(ConversationEvent::new(
            "video_processed",
            serde_json::json!({
                "url": url,
                "video_id": extract_video_id(url),
            }),
        ));

        Ok(options)
    }

    /// Re-fetch the options for the most recently processed video.
    pub async fn current_options(&self) -> Result<SummaryOptions, SummarizeVideoError> {
        Ok(self.gateway.video_summary_options().await?)
    }
}
