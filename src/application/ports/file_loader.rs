use async_trait::async_trait;

use crate::domain::Document;

/// Turns the bytes of one uploaded document into plain text. Empty text is a
/// valid result; a document that cannot be parsed is an error.
#[async_trait]
pub trait FileLoader: Send + Sync {
    async fn extract_text(
        &self,
        data: &[u8],
        document: &Document,
    ) -> Result<String, FileLoaderError>;
}

#[derive(Debug, thiserror::Error)]
pub enum FileLoaderError {
    #[error("extraction failed: {0}")]
    ExtractionFailed(String),
    #[error("extraction timed out after {0}s")]
    TimedOut(u64),
}
