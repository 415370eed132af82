//! Summarizer gateway adapter

use crate::backend::client::BackendClient;
use crate::backend::protocol::{
    AskRequest, AskResponse, CodeRequest, CodeResponse, ImageResponse, OptionsResponse,
    ProcessLinkRequest,
};
use async_trait::async_trait;
use recap_application::{Answer, GatewayError, SummarizerGateway};
use recap_domain::SummaryOptions;
use std::sync::Arc;

/// [`SummarizerGateway`] implementation over the backend HTTP API
pub struct HttpSummarizerGateway {
    client: Arc<BackendClient>,
}

impl HttpSummarizerGateway {
    pub fn new(client: Arc<BackendClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SummarizerGateway for HttpSummarizerGateway {
    async fn process_video_link(
        &self,
        youtube_url: &str,
    ) -> Result<SummaryOptions, GatewayError> {
        let response: OptionsResponse = self
            .client
            .post_json("/process_youtube_link", &ProcessLinkRequest { youtube_url })
            .await?;
        Ok(response.options)
    }

    async fn video_summary_options(&self) -> Result<SummaryOptions, GatewayError> {
        let response: OptionsResponse = self.client.get_json("/get_video_summary").await?;
        Ok(response.options)
    }

    async fn ask_question(
        &self,
        question: &str,
        youtube_url: Option<&str>,
        session_id: Option<&str>,
    ) -> Result<Answer, GatewayError> {
        let response: AskResponse = self
            .client
            .post_json(
                "/ask_question",
                &AskRequest {
                    youtube_url,
                    question,
                    session_id,
                },
            )
            .await?;
        Ok(Answer {
            response: response.response,
            session_id: response.session_id,
        })
    }

    async fn upload_file(&self, filename: &str, bytes: Vec<u8>) -> Result<(), GatewayError> {
        // The body carries no payload we need — only the error envelope.
        let _: serde_json::Value = self
            .client
            .post_multipart("/upload-file", "file", filename, bytes)
            .await?;
        Ok(())
    }

    async fn summarize_code(&self, code: &str) -> Result<String, GatewayError> {
        let response: CodeResponse = self
            .client
            .post_json("/summarize-code", &CodeRequest { code })
            .await?;
        Ok(response.explanation)
    }

    async fn analyze_image(
        &self,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<String, GatewayError> {
        let response: ImageResponse = self
            .client
            .post_multipart("/analyze-image", "image", filename, bytes)
            .await?;
        Ok(response.analysis)
    }
}
