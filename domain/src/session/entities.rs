//! Session domain entities

use serde::{Deserialize, Serialize};

/// A message in a chat transcript (Entity)
///
/// The backend distinguishes turns only by an `is_user` flag, so the entity
/// does the same rather than inventing a richer role taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(rename = "message")]
    pub text: String,
    #[serde(rename = "is_user")]
    pub from_user: bool,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_user: true,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            from_user: false,
        }
    }
}

/// A saved session as listed by the chat-history endpoint (Entity)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub id: String,
    pub date: String,
    pub title: String,
    pub description: String,
}

/// A live conversation with the backend (Entity)
///
/// The backend assigns a session id with the first answered question; once
/// set it is kept for the rest of the conversation so follow-up questions
/// land in the same stored session.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    id: Option<String>,
    messages: Vec<ChatMessage>,
}

impl ChatSession {
    /// Start a fresh, unsaved conversation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a stored session with an already-known id and transcript.
    pub fn resume(id: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            id: Some(id.into()),
            messages,
        }
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::user(text));
    }

    pub fn push_assistant(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::assistant(text));
    }

    /// Adopt a backend-assigned session id.
    ///
    /// Only the first assignment sticks; later ids are ignored so a
    /// conversation can never silently migrate between stored sessions.
    pub fn adopt_id(&mut self, id: impl Into<String>) {
        if self.id.is_none() {
            self.id = Some(id.into());
        }
    }
}
