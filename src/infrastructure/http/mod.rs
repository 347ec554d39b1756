use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::{
    controllers::{health, history::HistoryController, translator::TranslatorController},
    infrastructure::{
        api_client::TranslatorApi, config::Config, middleware::request_id_middleware,
    },
};

/// Assemble every route of the app. Kept separate from the listener so the
/// e2e tests can serve the exact same router on an ephemeral port.
pub fn build_router(
    api: Arc<dyn TranslatorApi>,
    translator_controller: Arc<TranslatorController>,
    history_controller: Arc<HistoryController>,
) -> Router {
    // Page routes (HTML)
    let page_routes = Router::new()
        .route("/", get(TranslatorController::index))
        .route("/translate", post(TranslatorController::translate))
        .route("/synthesize", post(TranslatorController::synthesize))
        .route(
            "/history/:entryId/delete",
            post(TranslatorController::delete_history_entry),
        )
        .route("/audio", get(TranslatorController::audio))
        .with_state(translator_controller);

    // History routes (JSON)
    let history_routes = Router::new()
        .route("/api/history", get(HistoryController::list_history))
        .route(
            "/api/history/:entryId",
            axum::routing::delete(HistoryController::delete_entry),
        )
        .with_state(history_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .with_state(api)
        .merge(page_routes)
        .merge(history_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_id_middleware)),
        )
}

/// Bind the configured address and serve until the process stops
pub async fn start_http_server(
    config: Arc<Config>,
    app: Router,
) -> Result<(), Box<dyn std::error::Error>> {
    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
