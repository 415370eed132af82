//! Port for structured conversation logging.
//!
//! Records what actually crossed the wire — questions, answers, summaries,
//! session saves — in a machine-readable transcript. This is separate from
//! `tracing`: tracing carries human-readable diagnostics, the transcript is
//! one JSON record per exchange.

use serde_json::Value;

/// A structured conversation event for logging.
pub struct ConversationEvent {
    /// Event type identifier (e.g., "question", "answer", "video_processed").
    pub event_type: &'static str,
    /// JSON payload with event-specific data.
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Port for recording conversation events.
///
/// `log` is synchronous and infallible: a transcript that cannot be
/// written must never break the conversation itself.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// No-op implementation for tests and when transcript logging is off.
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}
