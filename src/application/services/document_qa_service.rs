use std::sync::Arc;

use crate::application::ports::{FileLoader, FileLoaderError, LlmClient};
use crate::domain::Document;

use super::answer_service::{AnswerError, AnswerService};

/// Extract-then-answer pipeline for one uploaded document and one question.
/// Holds no per-request state, so a single instance serves concurrent requests.
pub struct DocumentQaService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    file_loader: Arc<F>,
    answer_service: AnswerService<L>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QaOutcome {
    pub extracted_text: String,
    pub answer: String,
}

impl<F, L> DocumentQaService<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub fn new(file_loader: Arc<F>, llm_client: Arc<L>) -> Self {
        Self {
            file_loader,
            answer_service: AnswerService::new(llm_client),
        }
    }

    #[tracing::instrument(
        skip(self, data, document, question),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
            size_bytes = document.size_bytes,
        )
    )]
    pub async fn ask(
        &self,
        data: &[u8],
        document: &Document,
        question: &str,
    ) -> Result<QaOutcome, QaError> {
        let extracted_text = self
            .file_loader
            .extract_text(data, document)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Text extraction failed");
                QaError::Extraction(e)
            })?;

        tracing::debug!(text_chars = extracted_text.len(), "Text extracted");

        let answer = self
            .answer_service
            .answer(&extracted_text, question)
            .await?;

        Ok(QaOutcome {
            extracted_text,
            answer,
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum QaError {
    #[error("extraction: {0}")]
    Extraction(FileLoaderError),
    #[error("answer: {0}")]
    Answer(#[from] AnswerError),
}
