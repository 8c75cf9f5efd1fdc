use crate::error::Result;
use crate::models::ApiResponse;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::info;

pub async fn health_check() -> Json<ApiResponse<String>> {
    Json(ApiResponse::success("P2P proxy is healthy".to_string()))
}

/// CORS preflight: no upstream call, no body.
pub async fn preflight() -> StatusCode {
    StatusCode::NO_CONTENT
}

pub async fn relay(State(state): State<Arc<AppState>>, body: Bytes) -> Result<Json<Value>> {
    let payload: Value = serde_json::from_slice(&body)?;
    let data = state.upstream.forward(&payload).await?;

    info!("Relayed search request to {}", state.upstream.url());
    Ok(Json(data))
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": "Method Not Allowed" })),
    )
}
