mod ask;
mod ask_request;
mod health;

use serde::Serialize;

pub use ask::{AskResponse, NO_FILE_MESSAGE, PROCESSING_FAILED_MESSAGE, ask_handler};
pub use ask_request::{AskRejection, AskRequest, UploadedFile};
pub use health::{HealthResponse, health_handler};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
