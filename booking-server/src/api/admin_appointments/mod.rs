//! Admin Appointment API 模块 (管理员账本操作)

mod handler;

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin/appointments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/purge", delete(handler::purge))
        .route("/purge-daily-run", post(handler::purge_daily_run))
        .layer(middleware::from_fn(require_admin))
}
