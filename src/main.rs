use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use docask::application::services::DocumentQaService;
use docask::infrastructure::llm::OpenAiClient;
use docask::infrastructure::observability::{TracingConfig, init_tracing};
use docask::infrastructure::text_processing::PdfAdapter;
use docask::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment).context("Failed to load settings")?;

    init_tracing(
        &TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    if settings.llm.api_key.is_none() {
        tracing::warn!("No LLM API key configured; questions will fail until OPENAI_API_KEY is set");
    }

    let file_loader = Arc::new(PdfAdapter::new());
    let llm_client = Arc::new(OpenAiClient::new(&settings.llm)?);

    let qa_service = Arc::new(DocumentQaService::new(file_loader, llm_client));

    let state = AppState {
        qa_service,
        max_upload_bytes: settings.upload.max_file_size_bytes(),
    };

    let router = create_router(state);

    let listener = TcpListener::bind((settings.server.host.as_str(), settings.server.port))
        .await
        .with_context(|| {
            format!(
                "Failed to bind {}:{}",
                settings.server.host, settings.server.port
            )
        })?;
    tracing::info!(model = %settings.llm.chat_model, "Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutting down");
}
