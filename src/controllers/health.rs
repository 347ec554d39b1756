use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use std::sync::Arc;

use crate::infrastructure::api_client::TranslatorApi;

pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Ready once the translation backend answers its own health probe
pub async fn health_ready(State(api): State<Arc<dyn TranslatorApi>>) -> impl IntoResponse {
    match api.health_check().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "status": "ready",
                "backend": "reachable"
            })),
        ),
        Err(e) => {
            tracing::warn!(error = %e, "Translation backend health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "status": "not_ready",
                    "backend": "unreachable"
                })),
            )
        }
    }
}
