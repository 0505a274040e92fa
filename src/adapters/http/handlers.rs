use crate::adapters::http::AppState;
use crate::core::canned;
use crate::core::dispatcher::dispatch_with_clock;
use crate::domain::model::{BriefPayload, CommandRequest, CommandResponse, StatusPayload};
use crate::utils::error::{BackendError, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

pub async fn ping_handler(State(state): State<AppState>) -> Json<StatusPayload> {
    Json(canned::status_payload(state.clock.now()))
}

pub async fn brief_handler(State(state): State<AppState>) -> Json<BriefPayload> {
    Json(canned::brief_payload(state.clock.now()))
}

pub async fn cmd_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<serde_json::Value>, JsonRejection>,
) -> Result<Json<CommandResponse>> {
    let request = match payload {
        Ok(Json(body)) => CommandRequest::from_body(body),
        // 沒有 JSON Content-Type 的請求視為空指令
        Err(JsonRejection::MissingJsonContentType(_)) => CommandRequest::default(),
        Err(rejection) => return Err(rejection.into()),
    };

    let raw = request.raw();
    let response = dispatch_with_clock(&raw, state.clock.as_ref());
    tracing::debug!(cmd = %raw.trim(), output_len = response.output.len(), "dispatched command");

    Ok(Json(response))
}

pub async fn not_found_handler() -> BackendError {
    BackendError::NotFound
}
