use axum::Json;
use axum::extract::{Extension, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::ports::{FileLoader, LlmClient};
use crate::domain::Document;
use crate::infrastructure::observability::{RequestId, sanitize_prompt};
use crate::presentation::state::AppState;

use super::ErrorResponse;
use super::ask_request::AskRequest;

pub const NO_FILE_MESSAGE: &str = "No file uploaded.";
pub const PROCESSING_FAILED_MESSAGE: &str = "An error occurred while processing the PDF.";

#[derive(Serialize)]
pub struct AskResponse {
    pub answer: String,
}

#[tracing::instrument(skip_all, fields(request_id = %request_id.0))]
pub async fn ask_handler<F, L>(
    State(state): State<AppState<F, L>>,
    Extension(request_id): Extension<RequestId>,
    request: AskRequest,
) -> Response
where
    F: FileLoader + 'static,
    L: LlmClient + 'static,
{
    let Some(file) = request.file else {
        tracing::info!(
            question = %sanitize_prompt(&request.question),
            "Ask request without a document"
        );
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                message: NO_FILE_MESSAGE.to_string(),
            }),
        )
            .into_response();
    };

    let document = Document::new(file.filename, file.content_type, file.data.len() as u64);

    tracing::debug!(
        question = %sanitize_prompt(&request.question),
        filename = %document.filename,
        declared_mime = ?document.declared_mime,
        bytes = document.size_bytes,
        "Processing document question"
    );

    match state
        .qa_service
        .ask(&file.data, &document, &request.question)
        .await
    {
        Ok(outcome) => {
            tracing::info!(
                document_id = %document.id.as_uuid(),
                text_chars = outcome.extracted_text.len(),
                "Question answered"
            );
            (
                StatusCode::OK,
                Json(AskResponse {
                    answer: outcome.answer,
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!(
                request_id = %request_id.0,
                document_id = %document.id.as_uuid(),
                error = %e,
                "Error processing document question"
            );
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    message: PROCESSING_FAILED_MESSAGE.to_string(),
                }),
            )
                .into_response()
        }
    }
}
