use docask::domain::{MessageRole, PromptMessages};

#[test]
fn given_text_and_question_when_building_prompt_then_has_three_ordered_messages() {
    let prompt = PromptMessages::grounded("The sky is blue.", "What color is the sky?");
    let messages = prompt.messages();

    assert_eq!(messages.len(), 3);
    assert_eq!(messages[0].role, MessageRole::System);
    assert_eq!(messages[0].content, "You are a helpful assistant.");
    assert_eq!(messages[1].role, MessageRole::User);
    assert_eq!(messages[1].content, "Here is the context: The sky is blue.");
    assert_eq!(messages[2].role, MessageRole::User);
    assert_eq!(messages[2].content, "What color is the sky?");
}

#[test]
fn given_empty_inputs_when_building_prompt_then_passes_them_through() {
    let prompt = PromptMessages::grounded("", "");
    let messages = prompt.messages();

    assert_eq!(messages[1].content, "Here is the context: ");
    assert_eq!(messages[2].content, "");
    assert_eq!(prompt.question(), "");
}

#[test]
fn given_prompt_roles_when_rendered_then_use_chat_completion_names() {
    let prompt = PromptMessages::grounded("text", "question");
    let roles: Vec<&str> = prompt.messages().iter().map(|m| m.role.as_str()).collect();

    assert_eq!(roles, ["system", "user", "user"]);
}
