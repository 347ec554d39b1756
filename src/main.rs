use anyhow::Context;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use promptlingo_web::controllers::{history::HistoryController, translator::TranslatorController};
use promptlingo_web::domain::translation::TranslationWorkflow;
use promptlingo_web::infrastructure::api_client::{HttpTranslatorApi, TranslatorApi};
use promptlingo_web::infrastructure::config::{Config, LogFormat};
use promptlingo_web::infrastructure::http::{build_router, start_http_server};
use promptlingo_web::presentation::PageRenderer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = Config::from_env()
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config);

    tracing::info!(
        "Starting PromptLingo on {}:{}",
        config.host,
        config.port
    );
    tracing::debug!(config = ?config, "Configuration loaded");

    // Provider keys are only reported as present or missing
    tracing::info!(
        has_openai_api_key = config.openai_api_key.is_some(),
        has_elevenlabs_api_key = config.elevenlabs_api_key.is_some(),
        "Provider credentials environment check"
    );
    if config.openai_api_key.is_none() || config.elevenlabs_api_key.is_none() {
        tracing::warn!("Provider API keys not set. The translation backend must be configured with its own credentials");
    }

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Translation backend client
    tracing::info!(base_url = %config.api_base_url, "Instantiating translation backend client...");
    let api: Arc<dyn TranslatorApi> = Arc::new(HttpTranslatorApi::new(config.api_base_url.clone()));

    if config.is_development() {
        if let Err(e) = api.health_check().await {
            tracing::warn!(error = %e, "Translation backend is not reachable yet");
        }
    }

    // 2. Session workflow and page renderer
    tracing::info!(voice_language = %config.voice_language, "Instantiating session workflow...");
    let session = Arc::new(Mutex::new(
        TranslationWorkflow::new(api.clone()).with_voice_language(config.voice_language),
    ));
    let renderer = Arc::new(PageRenderer::new().context("Failed to compile page templates")?);

    // 3. Controllers
    tracing::info!("Instantiating controllers...");
    let translator_controller = Arc::new(TranslatorController::new(
        session.clone(),
        renderer,
        config.api_base_url.clone(),
    ));
    let history_controller = Arc::new(HistoryController::new(session));

    // Start HTTP server with all routes
    let app = build_router(api, translator_controller, history_controller);
    start_http_server(config, app)
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))
        .context("HTTP server failed")?;

    Ok(())
}

fn init_logging(config: &Config) {
    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "promptlingo_web=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "promptlingo_web=debug,tower_http=debug".into()),
            )
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }
}
