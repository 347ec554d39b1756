use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use tracing::Instrument;
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Tags every request with a fresh id. Everything logged while handling the
/// request, `AppError` responses included, runs inside a span carrying the
/// id, and the id is echoed back in the `x-request-id` header.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = Uuid::new_v4().to_string();

    let span = tracing::debug_span!(
        "request",
        request_id = %request_id,
        method = %request.method(),
        uri = %request.uri()
    );
    let mut response = next.run(request).instrument(span).await;

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }

    response
}
