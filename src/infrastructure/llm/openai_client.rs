use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::{ContentFragment, PromptMessages, ResponseContent};
use crate::presentation::config::LlmSettings;

/// Chat-completions client for OpenAI and API-compatible providers.
pub struct OpenAiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: WireContent,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireContent {
    Text(String),
    Parts(Vec<WirePart>),
    Other(IgnoredAny),
}

impl Default for WireContent {
    fn default() -> Self {
        Self::Other(IgnoredAny)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WirePart {
    Bare(String),
    Typed { text: String },
    Other(IgnoredAny),
}

impl From<WireContent> for ResponseContent {
    fn from(content: WireContent) -> Self {
        match content {
            WireContent::Text(text) => ResponseContent::Text(text),
            WireContent::Parts(parts) => {
                ResponseContent::Fragments(parts.into_iter().map(ContentFragment::from).collect())
            }
            WireContent::Other(_) => ResponseContent::Unrecognized,
        }
    }
}

impl From<WirePart> for ContentFragment {
    fn from(part: WirePart) -> Self {
        match part {
            WirePart::Bare(text) | WirePart::Typed { text } => ContentFragment::Text(text),
            WirePart::Other(_) => ContentFragment::NonText,
        }
    }
}

impl OpenAiClient {
    pub fn new(settings: &LlmSettings) -> Result<Self, LlmClientError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()
            .map_err(|e| LlmClientError::ApiRequestFailed(format!("client build: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            api_key: settings
                .api_key
                .clone()
                .filter(|key| !key.trim().is_empty()),
            model: settings.chat_model.clone(),
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        })
    }

    fn build_request<'a>(&'a self, messages: &'a PromptMessages) -> ChatCompletionRequest<'a> {
        ChatCompletionRequest {
            model: &self.model,
            messages: messages
                .messages()
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    #[tracing::instrument(skip(self, messages), fields(model = %self.model))]
    async fn complete(&self, messages: &PromptMessages) -> Result<ResponseContent, LlmClientError> {
        let api_key = self.api_key.as_deref().ok_or(LlmClientError::MissingApiKey)?;

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&self.build_request(messages))
            .send()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let status = response.status();

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(LlmClientError::RateLimited);
        }

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::Unauthorized(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(LlmClientError::ApiRequestFailed(format!(
                "HTTP {}: {}",
                status, body
            )));
        }

        let raw_bytes = response
            .bytes()
            .await
            .map_err(|e| LlmClientError::ApiRequestFailed(e.to_string()))?;

        let completion: ChatCompletionResponse = serde_json::from_slice(&raw_bytes)
            .map_err(|e| LlmClientError::InvalidResponse(e.to_string()))?;

        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| LlmClientError::InvalidResponse("no choices returned".to_string()))?;

        Ok(choice.message.content.into())
    }
}
