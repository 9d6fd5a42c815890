mod document;
mod document_id;
mod message_role;
mod prompt;
mod response_content;

pub use document::Document;
pub use document_id::DocumentId;
pub use message_role::MessageRole;
pub use prompt::{CONTEXT_LABEL, PromptMessage, PromptMessages, SYSTEM_INSTRUCTION};
pub use response_content::{ContentFragment, NO_RESPONSE_FALLBACK, ResponseContent};
