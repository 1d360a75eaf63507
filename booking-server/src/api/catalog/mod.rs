//! Catalog API 模块 (公共浏览, 无需认证)

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/catalog", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/brands", get(handler::brands))
        .route("/branches", get(handler::branches))
        .route("/branch-table-types", get(handler::branch_table_types))
}
