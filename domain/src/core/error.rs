//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Not a valid YouTube URL: {0}")]
    InvalidVideoUrl(String),

    #[error("Unknown summary style: {0}")]
    UnknownSummaryStyle(String),

    #[error("Input is empty")]
    EmptyInput,
}
