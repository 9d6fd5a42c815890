use std::time::Duration;

use async_trait::async_trait;
use pdf_oxide::PdfDocument;

use crate::application::ports::{FileLoader, FileLoaderError};
use crate::domain::Document;

const EXTRACTION_TIMEOUT: Duration = Duration::from_secs(30);
const PAGE_SEPARATOR: &str = "\n\n";

/// Extracts the text of every page, parsing the upload straight from memory.
#[derive(Default)]
pub struct PdfAdapter;

impl PdfAdapter {
    pub fn new() -> Self {
        Self
    }

    fn extract_pages(data: Vec<u8>) -> Result<Vec<String>, FileLoaderError> {
        let mut doc = PdfDocument::from_bytes(data)
            .map_err(|e| FileLoaderError::ExtractionFailed(format!("failed to parse PDF: {e}")))?;

        let page_count = doc.page_count().map_err(|e| {
            FileLoaderError::ExtractionFailed(format!("failed to read page count: {e}"))
        })?;

        let mut pages = Vec::with_capacity(page_count);

        for page_index in 0..page_count {
            let text = doc.extract_text(page_index).map_err(|e| {
                FileLoaderError::ExtractionFailed(format!(
                    "failed to extract page {}: {e}",
                    page_index + 1
                ))
            })?;
            pages.push(text);
        }

        Ok(pages)
    }
}

#[async_trait]
impl FileLoader for PdfAdapter {
    #[tracing::instrument(
        skip(self, data),
        fields(
            document_id = %document.id.as_uuid(),
            filename = %document.filename,
        )
    )]
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError> {
        if let Some(mime) = document
            .declared_mime
            .as_deref()
            .filter(|mime| !mime.eq_ignore_ascii_case("application/pdf"))
        {
            tracing::debug!(mime, "Declared type is not PDF, parsing as PDF anyway");
        }

        let owned = data.to_vec();

        let pages = tokio::time::timeout(
            EXTRACTION_TIMEOUT,
            tokio::task::spawn_blocking(move || Self::extract_pages(owned)),
        )
        .await
        .map_err(|_| FileLoaderError::TimedOut(EXTRACTION_TIMEOUT.as_secs()))?
        .map_err(|e| FileLoaderError::ExtractionFailed(format!("task join error: {e}")))??;

        tracing::info!(page_count = pages.len(), "PDF text extraction complete");

        Ok(pages.join(PAGE_SEPARATOR))
    }
}
