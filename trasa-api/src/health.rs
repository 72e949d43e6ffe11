use axum::{http::StatusCode, response::Response, routing::get, Router};
use serde_json::json;

use crate::response::success;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/ping", get(health))
}

/// GET /health and GET /ping
pub async fn health() -> Response {
    success(StatusCode::OK, json!({ "status": "ok", "service": "trasa" }))
}
