use std::sync::Arc;

use crate::application::ports::{FileLoader, LlmClient};
use crate::application::services::DocumentQaService;

pub struct AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    pub qa_service: Arc<DocumentQaService<F, L>>,
    pub max_upload_bytes: usize,
}

impl<F, L> Clone for AppState<F, L>
where
    F: FileLoader,
    L: LlmClient,
{
    fn clone(&self) -> Self {
        Self {
            qa_service: Arc::clone(&self.qa_service),
            max_upload_bytes: self.max_upload_bytes,
        }
    }
}
