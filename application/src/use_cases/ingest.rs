//! Ingestion use cases: documents, code blocks, and images.
//!
//! Each flow validates its payload locally, hands it to the backend, and
//! (for code and images) returns the generated explanation. File contents
//! are read by the caller — these use cases never touch the filesystem.

use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::request_progress::RequestProgress;
use crate::ports::summarizer_gateway::{GatewayError, SummarizerGateway};
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

const UPLOAD_LABEL: &str = "Uploading file and processing summary...";
const CODE_LABEL: &str = "Analyzing code... Please wait.";
const IMAGE_LABEL: &str = "Analyzing image... Please wait.";

/// Image formats the backend accepts.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Errors shared by the ingestion flows.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("Please select a file to upload")]
    EmptyFile,

    #[error("Please enter a code block")]
    EmptyCode,

    #[error("Not a supported image format: {0}")]
    UnsupportedImage(String),

    #[error(transparent)]
    Gateway(#[from] GatewayError),
}

/// Upload a document for summarization.
pub struct SummarizeFileUseCase {
    gateway: Arc<dyn SummarizerGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl SummarizeFileUseCase {
    pub fn new(gateway: Arc<dyn SummarizerGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Upload `bytes` under `filename`. Follow-up questions go through the
    /// ask-question flow once this returns.
    pub async fn execute(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        progress: &dyn RequestProgress,
    ) -> Result<(), IngestError> {
        if bytes.is_empty() {
            return Err(IngestError::EmptyFile);
        }

        let size = bytes.len();
        progress.on_start(UPLOAD_LABEL);
        let result = self.gateway.upload_file(filename, bytes).await;
        progress.on_finish();
        result?;

        info!(filename, size, "File uploaded for summarization");
        self.conversation_logger.log(ConversationEvent::new(
            "file_uploaded",
            serde_json::json!({ "filename": filename, "bytes": size }),
        ));

        Ok(())
    }
}

/// Submit a code block for explanation.
pub struct AnalyzeCodeUseCase {
    gateway: Arc<dyn SummarizerGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnalyzeCodeUseCase {
    pub fn new(gateway: Arc<dyn SummarizerGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(
        &self,
        code: &str,
        progress: &dyn RequestProgress,
    ) -> Result<String, IngestError> {
        let code = code.trim();
        if code.is_empty() {
            return Err(IngestError::EmptyCode);
        }

        progress.on_start(CODE_LABEL);
        let result = self.gateway.summarize_code(code).await;
        progress.on_finish();
        let explanation = result?;

        info!("Code analyzed ({} bytes in)", code.len());
        self.conversation_logger.log(ConversationEvent::new(
            "code_analyzed",
            serde_json::json!({ "code_bytes": code.len(), "text": explanation }),
        ));

        Ok(explanation)
    }
}

/// Upload an image for analysis.
pub struct AnalyzeImageUseCase {
    gateway: Arc<dyn SummarizerGateway>,
    conversation_logger: Arc<dyn ConversationLogger>,
}

impl AnalyzeImageUseCase {
    pub fn new(gateway: Arc<dyn SummarizerGateway>) -> Self {
        Self {
            gateway,
            conversation_logger: Arc::new(NoConversationLogger),
        }
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    pub async fn execute(
        &self,
        filename: &str,
        bytes: Vec<u8>,
        progress: &dyn RequestProgress,
    ) -> Result<String, IngestError> {
        if bytes.is_empty() {
            return Err(IngestError::EmptyFile);
        }
        if !is_supported_image(filename) {
            return Err(IngestError::UnsupportedImage(filename.to_string()));
        }

        let size = bytes.len();
        progress.on_start(IMAGE_LABEL);
        let result = self.gateway.analyze_image(filename, bytes).await;
        progress.on_finish();
        let analysis = result?;

        info!(filename, size, "Image analyzed");
        self.conversation_logger.log(ConversationEvent::new(
            "image_analyzed",
            serde_json::json!({ "filename": filename, "bytes": size, "text": analysis }),
        ));

        Ok(analysis)
    }
}

fn is_supported_image(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::request_progress::NoRequestProgress;
    use crate::ports::summarizer_gateway::Answer;
    use async_trait::async_trait;
    use recap_domain::SummaryOptions;
    use std::sync::Mutex;

    // ==================== Test Mocks ====================

    #[derive(Default)]
    struct MockGateway {
        uploads: Mutex<Vec<(String, usize)>>,
    }

    #[async_trait]
    impl SummarizerGateway for MockGateway {
        async fn process_video_link(
            &self,
            _youtube_url: &str,
        ) -> Result<SummaryOptions, GatewayError> {
            unimplemented!("not used in this test")
        }

        async fn video_summary_options(&self) -> Result<SummaryOptions, GatewayError> {
            unimplemented!("not used in this test")
        }

        async fn ask_question(
            &self,
            _question: &str,
            _youtube_url: Option<&str>,
            _session_id: Option<&str>,
        ) -> Result<Answer, GatewayError> {
            unimplemented!("not used in this test")
        }

        async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> Result<(), GatewayError> {
            self.uploads
                .lock()
                .unwrap()
                .push((filename.to_string(), bytes.len()));
            Ok(())
        }

        async fn summarize_code(&self, code: &str) -> Result<String, GatewayError> {
            Ok(format!("This code has {} bytes.", code.len()))
        }

        async fn analyze_image(
            &self,
            filename: &str,
            _bytes: Vec<u8>,
        ) -> Result<String, GatewayError> {
            Ok(format!("A picture called {filename}."))
        }
    }

    // ==================== Tests ====================

    #[tokio::test]
    async fn test_file_upload_forwards_name_and_bytes() {
        let gateway = Arc::new(MockGateway::default());
        let use_case = SummarizeFileUseCase::new(gateway.clone());

        use_case
            .execute("notes.pdf", vec![1, 2, 3], &NoRequestProgress)
            .await
            .unwrap();

        assert_eq!(
            gateway.uploads.lock().unwrap().as_slice(),
            [("notes.pdf".to_string(), 3)]
        );
    }

    #[tokio::test]
    async fn test_empty_file_is_rejected() {
        let gateway = Arc::new(MockGateway::default());
        let use_case = SummarizeFileUseCase::new(gateway.clone());

        let result = use_case
            .execute("notes.pdf", Vec::new(), &NoRequestProgress)
            .await;

        assert!(matches!(result, Err(IngestError::EmptyFile)));
        assert!(gateway.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_code_is_trimmed_and_explained() {
        let gateway = Arc::new(MockGateway::default());
        let use_case = AnalyzeCodeUseCase::new(gateway);

        let explanation = use_case
            .execute("  fn main() {}  ", &NoRequestProgress)
            .await
            .unwrap();

        assert_eq!(explanation, "This code has 12 bytes.");
    }

    #[tokio::test]
    async fn test_blank_code_is_rejected() {
        let gateway = Arc::new(MockGateway::default());
        let use_case = AnalyzeCodeUseCase::new(gateway);

        let result = use_case.execute("   \n\t", &NoRequestProgress).await;
        assert!(matches!(result, Err(IngestError::EmptyCode)));
    }

    #[tokio::test]
    async fn test_image_analysis_returns_text() {
        let gateway = Arc::new(MockGateway::default());
        let use_case = AnalyzeImageUseCase::new(gateway);

        let analysis = use_case
            .execute("cat.PNG", vec![0xFF], &NoRequestProgress)
            .await
            .unwrap();

        assert_eq!(analysis, "A picture called cat.PNG.");
    }

    #[tokio::test]
    async fn test_unsupported_image_extension_is_rejected() {
        let gateway = Arc::new(MockGateway::default());
        let use_case = AnalyzeImageUseCase::new(gateway);

        let result = use_case
            .execute("document.pdf", vec![0xFF], &NoRequestProgress)
            .await;
        assert!(matches!(result, Err(IngestError::UnsupportedImage(_))));

        let use_case = AnalyzeImageUseCase::new(Arc::new(MockGateway::default()));
        let result = use_case.execute("noext", vec![0xFF], &NoRequestProgress).await;
        assert!(matches!(result, Err(IngestError::UnsupportedImage(_))));
    }

    #[test]
    fn test_supported_image_check() {
        assert!(is_supported_image("a.png"));
        assert!(is_supported_image("a.JPEG"));
        assert!(!is_supported_image("a.txt"));
        assert!(!is_supported_image("png"));
    }
}
