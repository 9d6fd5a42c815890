mod answer_service;
mod document_qa_service;

pub use answer_service::{AnswerError, AnswerService};
pub use document_qa_service::{DocumentQaService, QaError, QaOutcome};
