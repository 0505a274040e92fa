use crate::adapters::http::AppState;
use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_REQUEST_HEADERS, CONTENT_LENGTH, VARY,
};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

pub const PREFLIGHT_METHODS: &str = "GET,HEAD,PUT,PATCH,POST,DELETE";

fn append_vary(headers: &mut HeaderMap, value: &'static str) {
    headers.append(VARY, HeaderValue::from_static(value));
}

fn apply_origin(headers: &mut HeaderMap, allowed_origin: &str) {
    let Ok(value) = HeaderValue::from_str(allowed_origin) else {
        return;
    };
    headers.insert(ACCESS_CONTROL_ALLOW_ORIGIN, value);
    if allowed_origin != "*" {
        append_vary(headers, "Origin");
    }
}

/// Fixed-origin CORS. Preflights are answered here, ahead of the token gate.
pub async fn cors_middleware(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    let allowed_origin = state.config.allowed_origin.as_str();

    if req.method() == Method::OPTIONS {
        let mut resp = StatusCode::NO_CONTENT.into_response();
        let headers = resp.headers_mut();
        apply_origin(headers, allowed_origin);
        headers.insert(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static(PREFLIGHT_METHODS),
        );
        if let Some(requested) = req.headers().get(ACCESS_CONTROL_REQUEST_HEADERS) {
            headers.insert(ACCESS_CONTROL_ALLOW_HEADERS, requested.clone());
            append_vary(headers, "Access-Control-Request-Headers");
        }
        headers.insert(CONTENT_LENGTH, HeaderValue::from_static("0"));
        return resp;
    }

    let mut resp = next.run(req).await;
    apply_origin(resp.headers_mut(), allowed_origin);
    resp
}
