pub mod access_log;
pub mod auth;
pub mod cors;
pub mod handlers;
pub mod response;
pub mod security;

use crate::config::BackendConfig;
use crate::core::{Clock, SystemClock};
use axum::extract::DefaultBodyLimit;
use axum::middleware::{from_fn, from_fn_with_state};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;

pub const PATH_PING: &str = "/api/ping";
pub const PATH_BRIEF: &str = "/api/brief";
pub const PATH_CMD: &str = "/api/cmd";

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BackendConfig>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: BackendConfig) -> Self {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: BackendConfig, clock: Arc<dyn Clock>) -> Self {
        Self {
            config: Arc::new(config),
            clock,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(PATH_PING, get(handlers::ping_handler))
        .route(PATH_BRIEF, get(handlers::brief_handler))
        .route(PATH_CMD, post(handlers::cmd_handler))
        .route_layer(from_fn_with_state(state.clone(), auth::require_token))
        .fallback(handlers::not_found_handler)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes))
        .layer(from_fn(access_log::access_log_middleware))
        .layer(from_fn_with_state(state.clone(), cors::cors_middleware))
        .layer(from_fn(security::security_headers_middleware))
        .with_state(state)
}
