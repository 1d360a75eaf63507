//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`appointments`] - 顾客预约接口 (创建/列表/取消)
//! - [`employee_appointments`] - 员工排队管理接口 (分店范围)
//! - [`admin_appointments`] - 管理员账本接口 (列表/清理)
//! - [`catalog`] - 公共目录 (品牌/分店/桌型)
//! - [`availability`] - 公共余位查询

pub mod admin_appointments;
pub mod appointments;
pub mod availability;
pub mod catalog;
pub mod employee_appointments;
pub mod health;

use axum::Router;

use crate::core::ServerState;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(appointments::router())
        .merge(employee_appointments::router())
        .merge(admin_appointments::router())
        .merge(catalog::router())
        .merge(availability::router())
}
