//! Low-level HTTP client for the summarizer backend.
//!
//! Wraps a single `reqwest::Client` with the backend's base URL and the
//! error-envelope convention: failures arrive either as a non-2xx status or
//! as an `{"error": "..."}` field inside a 2xx JSON body, and both become
//! [`BackendError`] before any adapter sees them.

use crate::backend::error::{BackendError, Result};
use recap_domain::preview;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

/// Shared HTTP client for all backend adapters.
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// Build a client for the backend at `base_url`.
    ///
    /// `timeout` bounds the whole request — video processing is the slow
    /// path and sets the scale. `connect_timeout` fails fast when the
    /// backend isn't running at all.
    pub fn new(base_url: &str, timeout: Duration, connect_timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .connect_timeout(connect_timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let response = self.http.get(self.url(path)).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_json<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "POST");
        let response = self.http.post(self.url(path)).json(body).send().await?;
        Self::decode(response).await
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        field: &str,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<T> {
        debug!(path, filename, bytes = bytes.len(), "POST multipart");
        let part = reqwest::multipart::Part::bytes(bytes).file_name(filename.to_string());
        let form = reqwest::multipart::Form::new().part(field.to_string(), part);
        let response = self
            .http
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Self::decode(response).await
    }

    pub(crate) async fn delete_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "DELETE");
        let response = self.http.delete(self.url(path)).send().await?;
        Self::decode(response).await
    }

    /// Decode a response, honoring the `{"error": ...}` envelope.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;

        if let Ok(value) = serde_json::from_str::<serde_json::Value>(&body) {
            // The error field wins regardless of status code.
            if let Some(message) = value.get("error").and_then(|v| v.as_str()) {
                return Err(BackendError::Api {
                    status: status.as_u16(),
                    message: message.to_string(),
                });
            }
            if status.is_success() {
                return serde_json::from_value(value)
                    .map_err(|e| BackendError::Decode(e.to_string()));
            }
        }

        if !status.is_success() {
            return Err(BackendError::Http {
                status: status.as_u16(),
                body: preview(&body, 200),
            });
        }

        Err(BackendError::Decode(format!(
            "response was not valid JSON: {}",
            preview(&body, 200)
        )))
    }
}
