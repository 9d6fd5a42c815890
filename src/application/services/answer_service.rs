use std::sync::Arc;

use crate::application::ports::{LlmClient, LlmClientError};
use crate::domain::PromptMessages;

/// Answers a question against already extracted document text with a single
/// completion call.
pub struct AnswerService<L>
where
    L: LlmClient,
{
    llm_client: Arc<L>,
}

impl<L> AnswerService<L>
where
    L: LlmClient,
{
    pub fn new(llm_client: Arc<L>) -> Self {
        Self { llm_client }
    }

    #[tracing::instrument(skip_all, fields(context_chars = text.len()))]
    pub async fn answer(&self, text: &str, question: &str) -> Result<String, AnswerError> {
        let messages = PromptMessages::grounded(text, question);

        tracing::debug!(question_chars = question.len(), "Requesting completion");

        let content = self.llm_client.complete(&messages).await.map_err(|e| {
            tracing::error!(error = %e, "Completion failed");
            AnswerError::ProcessingFailed(e)
        })?;

        let answer = content.into_answer();
        tracing::info!(answer_chars = answer.len(), "Completion received");

        Ok(answer)
    }
}

/// Uniform failure of the answer step. The provider error stays reachable
/// through `source()` for logging but never appears in `Display`.
#[derive(Debug, thiserror::Error)]
pub enum AnswerError {
    #[error("processing failed")]
    ProcessingFailed(#[source] LlmClientError),
}
