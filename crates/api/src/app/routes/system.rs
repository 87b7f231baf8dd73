use axum::http::StatusCode;
use axum::response::IntoResponse;

/// Liveness probe; no input validation.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, "Server Status Run...")
}
