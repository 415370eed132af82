//! YouTube URL handling.
//!
//! The backend only accepts youtube.com / youtu.be links, so the URL check
//! happens client-side before any request is made. Video-id extraction is
//! used for logging and display; the backend re-derives the id itself.

use crate::core::error::DomainError;
use once_cell::sync::Lazy;
use regex::Regex;

static VIDEO_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(https?://)?(www\.)?(youtube\.com|youtu\.be)/.+").unwrap());

static VIDEO_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([A-Za-z0-9_-]{11})").unwrap()
});

/// Does this look like a YouTube video URL?
pub fn is_video_url(url: &str) -> bool {
    VIDEO_URL.is_match(url)
}

/// Validate a YouTube URL, returning it trimmed.
pub fn validate_video_url(url: &str) -> Result<&str, DomainError> {
    let trimmed = url.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyInput);
    }
    if !is_video_url(trimmed) {
        return Err(DomainError::InvalidVideoUrl(trimmed.to_string()));
    }
    Ok(trimmed)
}

/// Extract the 11-character video id from a watch or short-link URL.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}
