//! Availability API 模块 (公共余位查询, 无需认证)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/availability", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/table-types", get(handler::table_types))
        .route("/remaining", get(handler::remaining))
}
