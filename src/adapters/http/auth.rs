use crate::adapters::http::AppState;
use crate::utils::error::BackendError;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

const BEARER_PREFIX: &str = "Bearer ";

/// Token after the exact `Bearer ` prefix; empty when the header is absent or
/// uses another scheme.
pub fn bearer_token(headers: &HeaderMap) -> &str {
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix(BEARER_PREFIX))
        .unwrap_or("")
}

/// An unset server token rejects everything.
pub fn is_authorized(expected: &str, presented: &str) -> bool {
    !expected.is_empty() && presented == expected
}

pub async fn require_token(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let authorized = is_authorized(&state.config.api_token, bearer_token(req.headers()));
    if !authorized {
        tracing::warn!(
            method = %req.method(),
            path = %req.uri().path(),
            "rejected request without a valid bearer token"
        );
        return BackendError::Unauthorized.into_response();
    }
    next.run(req).await
}
