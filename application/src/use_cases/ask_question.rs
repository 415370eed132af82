//! Ask Question use case.
//!
//! Sends a question to the backend, scoped to the current video and stored
//! session when known, and records the exchange in the conversation
//! transcript. Session continuation is the caller's concern: the returned
//! [`Answer`] carries any newly assigned session id and
//! [`ChatSession::adopt_id`](recap_domain::ChatSession::adopt_id) enforces
//! the only-first-assignment rule.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::request_progress::RequestProgress;
use crate::ports::summarizer_gateway::{Answer, GatewayError, SummarizerGateway};
use recap_domain::preview;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Shown while the backend generates the answer.
const PROCESSING_LABEL: &str = "Processing your question... Please wait.";

/// Errors that can occur while asking a question.
#[derive(Error, Debug)]
pub enum AskQuestionError {
    #[error("Question is empty")]
    EmptyQuestion,

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Input for the [`AskQuestionUseCase`].
#[derive(Debug, Clone, Default)]
pub struct AskQuestionInput {
    /// The user's question.
    pub question: String,
    /// Video the question refers to, if the conversation is about one.
    pub youtube_url: Option<String>,
    /// Stored session to append the exchange to.
    pub session_id: Option<String>,
}

impl AskQuestionInput {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            youtube_url: None,
            session_id: None,
        }
    }

    pub fn with_video(mut self, youtube_url: impl Into<String>) -> Self {
        self.youtube_url = Some(youtube_url.into());
        self
    }

    pub fn with_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }
}

/// Use case for running one question/answer exchange.
pub struct AskQuestionUseCase {
    gateway: Arc<dyn SummarizerGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AskQuestionUseCase {
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

    pub async fn execute(
        &self,
        input: AskQuestionInput,
        progress: &dyn RequestProgress,
    ) -> Result<Answer, AskQuestionError> {
        let question = input.question.trim();
        if question.is_empty() {
            return Err(AskQuestionError::EmptyQuestion);
        }

        debug!(
            session_id = input.session_id.as_deref(),
            "Asking: {}",
            preview(question, 100)
        );

        self.conversation_logger.log(ConversationEvent::new(
            "question",
            serde_json::json!({
                "text": question,
                "youtube_url": input.youtube_url,
                "session_id": input.session_id,
            }),
        ));

        progress.on_start(PROCESSING_LABEL);
        let result = self
            .gateway
            .ask_question(
                question,
                input.youtube_url.as_deref(),
                input.session_id.as_deref(),
            )
            .await;
        progress.on_finish();

        let answer = result?;

        info!(
            new_session = answer.session_id.is_some() && input.session_id.is_none(),
            "Question answered ({} bytes)",
            answer.response.len()
        );

        self.conversation_logger.log(ConversationEvent::new(
            "answer",
            serde_json::json!({
                "bytes": answer.response.len(),
                "text": answer.response,
                "session_id": answer.session_id.as_deref().or(input.session_id.as_deref()),
            }),
        ));

        Ok(answer)
    }
}
