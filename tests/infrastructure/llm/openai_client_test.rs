use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::State;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::post;
use serde_json::{Value, json};
use tokio::net::TcpListener;

use docask::application::ports::{LlmClient, LlmClientError};
use docask::domain::{ContentFragment, PromptMessages, ResponseContent};
use docask::infrastructure::llm::OpenAiClient;
use docask::presentation::config::LlmSettings;

#[derive(Clone, Debug)]
struct CapturedRequest {
    authorization: Option<String>,
    body: Value,
}

#[derive(Clone)]
struct StubProvider {
    status: StatusCode,
    body: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

async fn chat_completions(
    State(stub): State<StubProvider>,
    headers: HeaderMap,
    body: String,
) -> impl IntoResponse {
    stub.captured.lock().unwrap().push(CapturedRequest {
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(String::from),
        body: serde_json::from_str(&body).unwrap_or(Value::Null),
    });

    (
        stub.status,
        [(CONTENT_TYPE, "application/json")],
        stub.body.clone(),
    )
}

async fn spawn_provider(
    status: StatusCode,
    body: impl Into<String>,
) -> (String, Arc<Mutex<Vec<CapturedRequest>>>) {
    let captured = Arc::new(Mutex::new(Vec::new()));
    let stub = StubProvider {
        status,
        body: body.into(),
        captured: Arc::clone(&captured),
    };

    let app = Router::new()
        .route("/v1/chat/completions", post(chat_completions))
        .with_state(stub);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/v1"), captured)
}

fn settings_for(base_url: &str, api_key: Option<&str>) -> LlmSettings {
    LlmSettings {
        api_key: api_key.map(String::from),
        base_url: base_url.to_string(),
        chat_model: "gpt-test".to_string(),
        temperature: None,
        max_tokens: None,
        timeout_secs: 5,
    }
}

fn completion_with(content: Value) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "choices": [
            { "index": 0, "message": { "role": "assistant", "content": content }, "finish_reason": "stop" }
        ]
    })
    .to_string()
}

fn prompt() -> PromptMessages {
    PromptMessages::grounded("The sky is blue.", "What color is the sky?")
}

#[tokio::test]
async fn given_string_content_when_completing_then_returns_text() {
    let (base_url, _) = spawn_provider(StatusCode::OK, completion_with(json!("Blue."))).await;
    let client = OpenAiClient::new(&settings_for(&base_url, Some("sk-test"))).unwrap();

    let content = client.complete(&prompt()).await.unwrap();

    assert_eq!(content, ResponseContent::Text("Blue.".to_string()));
}

#[tokio::test]
async fn given_part_list_content_when_completing_then_returns_fragments() {
    let parts = json!([
        { "type": "text", "text": "A" },
        { "type": "image_url", "image_url": { "url": "https://example.com/a.png" } },
        "B",
        { "text": 5 }
    ]);
    let (base_url, _) = spawn_provider(StatusCode::OK, completion_with(parts)).await;
    let client = OpenAiClient::new(&settings_for(&base_url, Some("sk-test"))).unwrap();

    let content = client.complete(&prompt()).await.unwrap();

    assert_eq!(
        content,
        ResponseContent::Fragments(vec![
            ContentFragment::Text("A".to_string()),
            ContentFragment::NonText,
            ContentFragment::Text("B".to_string()),
            ContentFragment::NonText,
        ])
    );
    assert_eq!(content.into_answer(), "A B");
}

#[tokio::test]
async fn given_null_content_when_completing_then_returns_unrecognized() {
    let (base_url, _) = spawn_provider(StatusCode::OK, completion_with(Value::Null)).await;
    let client = OpenAiClient::new(&settings_for(&base_url, Some("sk-test"))).unwrap();

    let content = client.complete(&prompt()).await.unwrap();

    assert_eq!(content, ResponseContent::Unrecognized);
}

#[tokio::test]
async fn given_message_without_content_when_completing_then_returns_unrecognized() {
    let body = json!({ "choices": [ { "message": { "role": "assistant" } } ] }).to_string();
    let (base_url, _) = spawn_provider(StatusCode::OK, body).await;
    let client = OpenAiClient::new(&settings_for(&base_url, Some("sk-test"))).unwrap();

    let content = client.complete(&prompt()).await.unwrap();

    assert_eq!(content, ResponseContent::Unrecognized);
}

#[tokio::test]
async fn given_prompt_when_completing_then_sends_model_messages_and_bearer_key() {
    let (base_url, captured) =
        spawn_provider(StatusCode::OK, completion_with(json!("Blue."))).await;
    let client = OpenAiClient::new(&settings_for(&format!("{base_url}/"), Some("sk-test"))).unwrap();

    client.complete(&prompt()).await.unwrap();

    let captured = captured.lock().unwrap();
    assert_eq!(captured.len(), 1);
    assert_eq!(captured[0].authorization.as_deref(), Some("Bearer sk-test"));
    let body = &captured[0].body;
    assert_eq!(body["model"], "gpt-test");
    assert_eq!(
        body["messages"],
        json!([
            { "role": "system", "content": "You are a helpful assistant." },
            { "role": "user", "content": "Here is the context: The sky is blue." },
            { "role": "user", "content": "What color is the sky?" }
        ])
    );
    assert!(body.get("temperature").is_none());
    assert!(body.get("max_tokens").is_none());
}

#[tokio::test]
async fn given_sampling_settings_when_completing_then_includes_them() {
    let (base_url, captured) =
        spawn_provider(StatusCode::OK, completion_with(json!("Blue."))).await;
    let mut settings = settings_for(&base_url, Some("sk-test"));
    settings.temperature = Some(0.5);
    settings.max_tokens = Some(256);
    let client = OpenAiClient::new(&settings).unwrap();

    client.complete(&prompt()).await.unwrap();

    let body = captured.lock().unwrap()[0].body.clone();
    assert_eq!(body["temperature"], json!(0.5));
    assert_eq!(body["max_tokens"], json!(256));
}

#[tokio::test]
async fn given_no_api_key_when_completing_then_fails_without_calling_provider() {
    let (base_url, captured) =
        spawn_provider(StatusCode::OK, completion_with(json!("Blue."))).await;
    let client = OpenAiClient::new(&settings_for(&base_url, None)).unwrap();

    let result = client.complete(&prompt()).await;

    assert!(matches!(result, Err(LlmClientError::MissingApiKey)));
    assert!(captured.lock().unwrap().is_empty());
}

#[tokio::test]
async fn given_blank_api_key_when_completing_then_reports_missing_key() {
    let (base_url, _) = spawn_provider(StatusCode::OK, completion_with(json!("Blue."))).await;
    let client = OpenAiClient::new(&settings_for(&base_url, Some("  "))).unwrap();

    let result = client.complete(&prompt()).await;

    assert!(matches!(result, Err(LlmClientError::MissingApiKey)));
}

#[tokio::test]
async fn given_rate_limit_status_when_completing_then_returns_rate_limited() {
    let (base_url, _) = spawn_provider(StatusCode::TOO_MANY_REQUESTS, "{}").await;
    let client = OpenAiClient::new(&settings_for(&base_url, Some("sk-test"))).unwrap();

    let result = client.complete(&prompt()).await;

    assert!(matches!(result, Err(LlmClientError::RateLimited)));
}

#[tokio::test]
async fn given_unauthorized_status_when_completing_then_returns_unauthorized() {
    let body = json!({ "error": { "message": "Incorrect API key provided" } }).to_string();
    let (base_url, _) = spawn_provider(StatusCode::UNAUTHORIZED, body).await;
    let client = OpenAiClient::new(&settings_for(&base_url, Some("sk-wrong"))).unwrap();

    let result = client.complete(&prompt()).await;

    assert!(matches!(result, Err(LlmClientError::Unauthorized(detail)) if detail.contains("401")));
}

#[tokio::test]
async fn given_server_error_status_when_completing_then_returns_api_request_failed() {
    let (base_url, _) = spawn_provider(StatusCode::INTERNAL_SERVER_ERROR, "upstream down").await;
    let client = OpenAiClient::new(&settings_for(&base_url, Some("sk-test"))).unwrap();

    let result = client.complete(&prompt()).await;

    assert!(
        matches!(result, Err(LlmClientError::ApiRequestFailed(detail)) if detail.contains("upstream down"))
    );
}

#[tokio::test]
async fn given_non_json_body_when_completing_then_returns_invalid_response() {
    let (base_url, _) = spawn_provider(StatusCode::OK, "<html>oops</html>").await;
    let client = OpenAiClient::new(&settings_for(&base_url, Some("sk-test"))).unwrap();

    let result = client.complete(&prompt()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_empty_choices_when_completing_then_returns_invalid_response() {
    let (base_url, _) = spawn_provider(StatusCode::OK, json!({ "choices": [] }).to_string()).await;
    let client = OpenAiClient::new(&settings_for(&base_url, Some("sk-test"))).unwrap();

    let result = client.complete(&prompt()).await;

    assert!(matches!(result, Err(LlmClientError::InvalidResponse(_))));
}
