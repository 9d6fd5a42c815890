use super::message_role::MessageRole;

pub const SYSTEM_INSTRUCTION: &str = "You are a helpful assistant.";
pub const CONTEXT_LABEL: &str = "Here is the context: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessage {
    pub role: MessageRole,
    pub content: String,
}

impl PromptMessage {
    fn new(role: MessageRole, content: String) -> Self {
        Self { role, content }
    }
}

/// The fixed three-message prompt sent for every question: instruction,
/// document context, then the question itself. Order matters to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptMessages {
    messages: [PromptMessage; 3],
}

impl PromptMessages {
    pub fn grounded(text: &str, question: &str) -> Self {
        Self {
            messages: [
                PromptMessage::new(MessageRole::System, SYSTEM_INSTRUCTION.to_string()),
                PromptMessage::new(MessageRole::User, format!("{CONTEXT_LABEL}{text}")),
                PromptMessage::new(MessageRole::User, question.to_string()),
            ],
        }
    }

    pub fn messages(&self) -> &[PromptMessage] {
        &self.messages
    }

    pub fn question(&self) -> &str {
        &self.messages[2].content
    }
}
