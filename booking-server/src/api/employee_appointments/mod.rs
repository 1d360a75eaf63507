//! Employee Appointment API 模块 (员工侧, 分店范围)

mod handler;

use axum::{
    Router, middleware,
    routing::{get, patch},
};

use crate::auth::require_employee;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/employee/appointments", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/{id}/status", patch(handler::update_status))
        .layer(middleware::from_fn(require_employee))
}
