use axum::Json;
use axum::body::Bytes;
use axum::extract::multipart::{MultipartError, MultipartRejection};
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Multipart, Request};
use axum::http::StatusCode;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

use super::ErrorResponse;

const FILE_FIELD: &str = "file";
const QUESTION_FIELD: &str = "question";
const MALFORMED_BODY_MESSAGE: &str = "Malformed request body.";
const TOO_LARGE_MESSAGE: &str = "Uploaded file is too large.";

/// A question about a document, sent either as multipart form data with the
/// document attached or as a JSON follow-up carrying only the question.
#[derive(Debug)]
pub struct AskRequest {
    pub file: Option<UploadedFile>,
    pub question: String,
}

#[derive(Debug)]
pub struct UploadedFile {
    pub filename: String,
    pub content_type: Option<String>,
    pub data: Bytes,
}

#[derive(Deserialize)]
struct FollowUpQuestion {
    #[serde(default)]
    question: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum AskRejection {
    #[error("multipart: {0}")]
    Multipart(#[from] MultipartRejection),
    #[error("multipart field: {0}")]
    MultipartField(#[from] MultipartError),
    #[error("json: {0}")]
    Json(#[from] JsonRejection),
}

impl AskRejection {
    /// Oversized uploads keep their 413; every other body problem is a 400.
    pub fn status(&self) -> StatusCode {
        let status = match self {
            Self::Multipart(rejection) => rejection.status(),
            Self::MultipartField(error) => error.status(),
            Self::Json(rejection) => rejection.status(),
        };

        if status == StatusCode::PAYLOAD_TOO_LARGE {
            status
        } else {
            StatusCode::BAD_REQUEST
        }
    }
}

impl IntoResponse for AskRejection {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::info!(error = %self, status = %status, "Rejected ask request body");

        let message = if status == StatusCode::PAYLOAD_TOO_LARGE {
            TOO_LARGE_MESSAGE
        } else {
            MALFORMED_BODY_MESSAGE
        };

        (
            status,
            Json(ErrorResponse {
                message: message.to_string(),
            }),
        )
            .into_response()
    }
}

impl<S> FromRequest<S> for AskRequest
where
    S: Send + Sync,
{
    type Rejection = AskRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state).await?;
            return read_multipart(multipart).await;
        }

        if content_type.starts_with("application/json") {
            let Json(body) = Json::<FollowUpQuestion>::from_request(req, state).await?;
            return Ok(Self {
                file: None,
                question: body.question.unwrap_or_default(),
            });
        }

        Ok(Self {
            file: None,
            question: String::new(),
        })
    }
}

async fn read_multipart(mut multipart: Multipart) -> Result<AskRequest, AskRejection> {
    let mut file = None;
    let mut question = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some(FILE_FIELD) if file.is_none() => {
                let filename = field.file_name().unwrap_or("unknown").to_string();
                let content_type = field.content_type().map(str::to_string);
                let data = field.bytes().await?;

                // Browsers submit an empty part when no file was picked.
                if !data.is_empty() {
                    file = Some(UploadedFile {
                        filename,
                        content_type,
                        data,
                    });
                }
            }
            Some(QUESTION_FIELD) if question.is_none() => {
                question = Some(field.text().await?);
            }
            _ => {}
        }
    }

    Ok(AskRequest {
        file,
        question: question.unwrap_or_default(),
    })
}
