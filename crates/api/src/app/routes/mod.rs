use axum::{routing::get, Router};

pub mod client;
pub mod system;

/// Full routing tree.
///
/// The client dispatcher is the fallback for every path, so method handling
/// (including the 403 for unsupported verbs) applies service-wide; only the
/// health probe gets a dedicated GET route, and its other methods fall back
/// to the dispatcher as well. HEAD is routed to the dispatcher explicitly,
/// since a bare `get()` would otherwise answer it.
pub fn router() -> Router {
    Router::new()
        .route(
            "/healthz",
            get(system::health)
                .head(client::dispatch)
                .fallback(client::dispatch),
        )
        .fallback(client::dispatch)
}
