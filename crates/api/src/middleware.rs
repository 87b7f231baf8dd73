use std::time::Duration;

use axum::{
    extract::State,
    http::StatusCode,
    middleware::Next,
    response::Response,
};

#[derive(Clone)]
pub struct DeadlineState {
    pub deadline: Duration,
}

/// Abort requests that exceed the configured deadline.
///
/// Stands in for socket-level read/write timeouts: the whole
/// receive-dispatch-respond sequence must finish within the budget.
pub async fn deadline_middleware(
    State(state): State<DeadlineState>,
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, StatusCode> {
    tokio::time::timeout(state.deadline, next.run(req))
        .await
        .map_err(|_| StatusCode::REQUEST_TIMEOUT)
}
