//! Provider forwarder. One POST per relay call, no retries.

use axum::body::Bytes;
use axum::http::{StatusCode, header};
use secrecy::{ExposeSecret, SecretString};

use crate::config::RelayConfig;
use crate::error::RelayError;

/// Raw provider reply, passed back to the caller untouched.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub body: Bytes,
}

pub struct Upstream {
    client: reqwest::Client,
    url: String,
    api_key: SecretString,
}

impl Upstream {
    pub fn new(config: &RelayConfig) -> Result<Self, RelayError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| RelayError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: config.upstream_url(),
            api_key: config.api_key.clone(),
        })
    }

    /// POST `body` verbatim to the provider with the credential attached.
    ///
    /// reqwest errors carry the full URL, key included, so it is stripped
    /// before the error leaves this function.
    pub async fn forward(&self, body: Bytes) -> Result<UpstreamResponse, RelayError> {
        let response = self
            .client
            .post(&self.url)
            .query(&[("key", self.api_key.expose_secret())])
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| RelayError::Upstream(e.without_url().to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| RelayError::Upstream(e.without_url().to_string()))?;

        Ok(UpstreamResponse { status, body })
    }
}
