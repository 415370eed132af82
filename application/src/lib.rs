//! Application layer for recap
//!
//! Use cases orchestrate the domain against a set of ports; every outward
//! dependency (the summarizer backend, session persistence, profile
//! updates, progress display, transcript logging) is a trait implemented in
//! the infrastructure or presentation layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
pub use ports::profile_gateway::ProfileGateway;
pub use ports::request_progress::{NoRequestProgress, RequestProgress};
pub use ports::session_store::SessionStore;
pub use ports::summarizer_gateway::{Answer, GatewayError, SummarizerGateway};
pub use use_cases::ask_question::{AskQuestionError, AskQuestionInput, AskQuestionUseCase};
pub use use_cases::ingest::{
    AnalyzeCodeUseCase, AnalyzeImageUseCase, IngestError, SummarizeFileUseCase,
};
pub use use_cases::manage_history::ManageHistoryUseCase;
pub use use_cases::summarize_video::{SummarizeVideoError, SummarizeVideoUseCase};
pub use use_cases::update_profile::{UpdateProfileError, UpdateProfileUseCase};
