//! Domain layer for recap
//!
//! This crate contains the core entities and pure logic of the summarizer
//! client. It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Response formatting
//!
//! Assistant answers arrive as flat text. The [`format`] module classifies a
//! block of text into a structural [`format::ContentType`] (table of
//! contents, steps, bullet list, Q&A, ...) and reflows its line breaks for
//! readable display. User-authored text is never reformatted.
//!
//! ## Sessions and sources
//!
//! A [`session::ChatSession`] is the live transcript of a conversation with
//! the backend; the [`source`] module knows which URLs count as summarizable
//! videos and which summary styles the backend offers.

pub mod core;
pub mod format;
pub mod session;
pub mod source;
pub mod util;

// Re-export commonly used types
pub use crate::core::error::DomainError;
pub use format::{ContentType, format_response};
pub use session::entities::{ChatMessage, ChatSession, SessionSummary};
pub use source::{
    entities::{SummaryOptions, SummaryStyle},
    video::{extract_video_id, is_video_url, validate_video_url},
};
pub use util::preview;
