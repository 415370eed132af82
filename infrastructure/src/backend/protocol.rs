//! Wire types for the backend API.
//!
//! Request bodies are exactly what the endpoints expect; response bodies
//! reuse domain types (`SummaryOptions`, `ChatMessage`, `SessionSummary`)
//! where the wire shape already matches them.

use recap_domain::{ChatMessage, SummaryOptions};
use serde::{Deserialize, Serialize};

// ==================== Requests ====================

/// POST /process_youtube_link
#[derive(Debug, Serialize)]
pub struct ProcessLinkRequest<'a> {
    pub youtube_url: &'a str,
}

/// POST /ask_question
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    pub youtube_url: Option<&'a str>,
    pub question: &'a str,
    pub session_id: Option<&'a str>,
}

/// POST /summarize-code
#[derive(Debug, Serialize)]
pub struct CodeRequest<'a> {
    pub code: &'a str,
}

/// POST /save-chat-session
#[derive(Debug, Serialize)]
pub struct SaveSessionRequest<'a> {
    pub date: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

/// POST /update_nickname
#[derive(Debug, Serialize)]
pub struct NicknameRequest<'a> {
    pub nickname: &'a str,
}

/// POST /update_password
#[derive(Debug, Serialize)]
pub struct PasswordRequest<'a> {
    pub current_password: &'a str,
    pub new_password: &'a str,
}

// ==================== Responses ====================

/// `{"options": {...}}` from /process_youtube_link and /get_video_summary
#[derive(Debug, Deserialize)]
pub struct OptionsResponse {
    pub options: SummaryOptions,
}

/// `{"response": "...", "session_id": "..."}` from /ask_question
#[derive(Debug, Deserialize)]
pub struct AskResponse {
    pub response: String,
    #[serde(default)]
    pub session_id: Option<String>,
}

/// `{"explanation": "..."}` from /summarize-code
#[derive(Debug, Deserialize)]
pub struct CodeResponse {
    pub explanation: String,
}

/// `{"analysis": "..."}` from /analyze-image
#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    pub analysis: String,
}

/// `{"success": true}` from the session save/delete endpoints
#[derive(Debug, Deserialize)]
pub struct SuccessResponse {
    #[serde(default)]
    pub success: bool,
}

/// `{"messages": [...]}` from /chat-session/{id}
#[derive(Debug, Deserialize)]
pub struct SessionMessagesResponse {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// `{"message": "..."}` from the profile endpoints
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
