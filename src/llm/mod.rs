//! Completion client for LifeStyleCheck.
//!
//! The controller only knows the `CompletionClient` trait. The production
//! implementation is `RelayClient`, which POSTs `generateContent` bodies to
//! the relay proxy; tests substitute scripted stubs.

mod relay_client;
pub mod wire;

pub use relay_client::RelayClient;
pub use wire::{
    Content, ContentRole, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};

use async_trait::async_trait;

use crate::error::LlmError;

/// Issues one completion request and returns the decoded reply.
///
/// A reply without text is still `Ok`; deciding what to do with it is the
/// caller's business.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Short name used in logs.
    fn endpoint(&self) -> &str;

    async fn generate(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, LlmError>;
}
