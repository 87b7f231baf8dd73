//! HTTP API application wiring (Axum router).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and JSON-to-domain decoding
//! - `errors.rs`: consistent error responses

use axum::{Extension, Router};
use tower::ServiceBuilder;

use clientdesk_core::LabelPolicy;

use crate::config::ServerConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
///
/// The decode policy rides along as an `Extension` so every dispatch sees the
/// same immutable policy; there is no other shared state.
pub fn build_app(policy: LabelPolicy, config: &ServerConfig) -> Router {
    let deadline = middleware::DeadlineState {
        deadline: config.request_deadline(),
    };

    routes::router().layer(
        ServiceBuilder::new()
            .layer(Extension(policy))
            .layer(axum::middleware::from_fn_with_state(
                deadline,
                middleware::deadline_middleware,
            )),
    )
}
