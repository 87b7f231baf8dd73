use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Plain-text response; the whole surface speaks text bodies.
pub fn text_response(status: StatusCode, body: &'static str) -> Response {
    (status, body).into_response()
}

/// 412: the request's stated preconditions (path shape, decodable body)
/// were not met.
pub fn precondition_failed(message: &'static str) -> Response {
    text_response(StatusCode::PRECONDITION_FAILED, message)
}

/// 403: method outside the supported set.
pub fn method_not_allowed() -> Response {
    text_response(StatusCode::FORBIDDEN, "Method not allowed.")
}
