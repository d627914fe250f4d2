//! HTTP client for the relay proxy.

use async_trait::async_trait;

use super::{CompletionClient, GenerateContentRequest, GenerateContentResponse};
use crate::error::LlmError;

/// Talks to the relay over HTTP. One attempt per call, client-default timeouts.
pub struct RelayClient {
    url: String,
    client: reqwest::Client,
}

impl RelayClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl CompletionClient for RelayClient {
    fn endpoint(&self) -> &str {
        &self.url
    }

    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError> {
        let response = self
            .client
            .post(&self.url)
            .json(request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed {
                endpoint: self.url.clone(),
                reason: e.to_string(),
            })?;

        // Provider errors come back as non-2xx JSON without candidates; they
        // are decoded like any other body.
        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = %status, "Relay returned non-success status");
        }

        response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|e| LlmError::InvalidResponse {
                endpoint: self.url.clone(),
                reason: e.to_string(),
            })
    }
}
