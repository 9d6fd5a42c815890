use async_trait::async_trait;

use crate::domain::{PromptMessages, ResponseContent};

#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, messages: &PromptMessages) -> Result<ResponseContent, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("no api key configured")]
    MissingApiKey,
    #[error("unauthorized: {0}")]
    Unauthorized(String),
    #[error("rate limited")]
    RateLimited,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
