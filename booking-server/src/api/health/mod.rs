//! Health check API 模块

use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/healthz", get(healthz))
}

/// GET /healthz - 存活检查 (无需认证)
async fn healthz() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
