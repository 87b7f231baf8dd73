//! Method-driven dispatch for the client resource.

use axum::{
    extract::{Extension, Request},
    http::{Method, StatusCode},
    response::Response,
};

use clientdesk_core::LabelPolicy;

use crate::app::{dto, errors};

/// Largest request body the post handler will buffer.
const BODY_LIMIT: usize = 1 << 20;

/// The closed set of verbs the client resource supports.
///
/// Dispatching through this enum keeps the match exhaustive; anything the
/// conversion rejects is an unsupported method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

impl TryFrom<&Method> for Verb {
    type Error = ();

    fn try_from(method: &Method) -> Result<Self, Self::Error> {
        if method == Method::GET {
            Ok(Verb::Get)
        } else if method == Method::POST {
            Ok(Verb::Post)
        } else if method == Method::PUT {
            Ok(Verb::Put)
        } else if method == Method::DELETE {
            Ok(Verb::Delete)
        } else {
            Err(())
        }
    }
}

/// Route a request to exactly one handler based on its method.
///
/// Method-driven only: path validation is each handler's own responsibility
/// (currently only the post handler does any).
pub async fn dispatch(Extension(policy): Extension<LabelPolicy>, req: Request) -> Response {
    match Verb::try_from(req.method()) {
        Ok(Verb::Get) => get_client(),
        Ok(Verb::Post) => post_client(policy, req).await,
        Ok(Verb::Put) => put_client(),
        Ok(Verb::Delete) => delete_client(),
        Err(()) => {
            tracing::warn!(method = %req.method(), "unsupported method");
            errors::method_not_allowed()
        }
    }
}

/// Whether a raw path is an acceptable post target: exactly two segments
/// after splitting on `/`, the second case-insensitively `client`.
fn is_post_path(path: &str) -> bool {
    let segments: Vec<&str> = path.split('/').collect();
    segments.len() == 2 && segments[1].eq_ignore_ascii_case("client")
}

async fn post_client(policy: LabelPolicy, req: Request) -> Response {
    if !is_post_path(req.uri().path()) {
        // Body dropped unread.
        return errors::precondition_failed("POST requires the /client path and a JSON body.");
    }

    let bytes = match axum::body::to_bytes(req.into_body(), BODY_LIMIT).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(error = %e, "failed to read request body");
            return errors::precondition_failed("Invalid body formatting.");
        }
    };

    match dto::decode_client(&bytes, policy) {
        Ok(client) => {
            // Acknowledged, not persisted: the decoded client is dropped here.
            tracing::debug!(
                name = client.name(),
                account_type = %client.account_type(),
                "decoded client payload"
            );
            tracing::info!("Client posted...");
            errors::text_response(StatusCode::OK, "Client posted...")
        }
        Err(e) => {
            tracing::warn!(error = %e, "rejected client payload");
            errors::precondition_failed("Invalid body formatting.")
        }
    }
}

fn get_client() -> Response {
    tracing::info!("Client found...");
    errors::text_response(StatusCode::OK, "Client found...")
}

fn put_client() -> Response {
    tracing::info!("Client updated...");
    errors::text_response(StatusCode::OK, "Client updated...")
}

fn delete_client() -> Response {
    tracing::info!("Client deleted...");
    errors::text_response(StatusCode::OK, "Client deleted...")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbs_cover_the_four_supported_methods() {
        assert_eq!(Verb::try_from(&Method::GET), Ok(Verb::Get));
        assert_eq!(Verb::try_from(&Method::POST), Ok(Verb::Post));
        assert_eq!(Verb::try_from(&Method::PUT), Ok(Verb::Put));
        assert_eq!(Verb::try_from(&Method::DELETE), Ok(Verb::Delete));
    }

    #[test]
    fn other_methods_are_rejected() {
        assert_eq!(Verb::try_from(&Method::PATCH), Err(()));
        assert_eq!(Verb::try_from(&Method::OPTIONS), Err(()));
        assert_eq!(Verb::try_from(&Method::HEAD), Err(()));
    }

    #[test]
    fn post_path_accepts_client_case_insensitively() {
        assert!(is_post_path("/client"));
        assert!(is_post_path("/CLIENT"));
        assert!(is_post_path("/Client"));
    }

    #[test]
    fn post_path_rejects_other_shapes() {
        assert!(!is_post_path("/cliente"));
        assert!(!is_post_path("/client/"));
        assert!(!is_post_path("/client/7"));
        assert!(!is_post_path("/"));
        assert!(!is_post_path(""));
    }
}
