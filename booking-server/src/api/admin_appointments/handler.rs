//! Admin Appointment API Handlers
//!
//! 两个清理入口语义不同, 刻意不合并:
//! - `DELETE /purge` 按状态集合删全表，给管理后台的"清空"按钮用
//! - `POST /purge-daily-run` 跑每日保留策略 (仅终态且日期已过)，和
//!   定时任务调用同一个谓词

use axum::{
    Json,
    extract::{Query, State},
};

use shared::models::{AppointmentDetail, AppointmentStatus};
use shared::{AppError, AppResult, ErrorCode};

use crate::booking::retention;
use crate::core::ServerState;
use crate::db::repository::appointment;
use crate::utils::time;

#[derive(serde::Deserialize)]
pub struct PurgeQuery {
    /// Comma-separated status allow-list; defaults to the terminal pair
    pub statuses: Option<String>,
}

#[derive(serde::Serialize)]
pub struct LedgerResponse {
    pub appointments: Vec<AppointmentDetail>,
}

#[derive(serde::Serialize)]
pub struct PurgeResponse {
    pub removed: u64,
}

/// GET /api/admin/appointments - 全量账本列表
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<LedgerResponse>> {
    let appointments = appointment::find_all_details(&state.pool).await?;
    Ok(Json(LedgerResponse { appointments }))
}

/// DELETE /api/admin/appointments/purge?statuses=a,b - 按状态清理
pub async fn purge(
    State(state): State<ServerState>,
    Query(query): Query<PurgeQuery>,
) -> AppResult<Json<PurgeResponse>> {
    let raw = query
        .statuses
        .unwrap_or_else(|| "canceled,completed".to_string());
    let statuses: Vec<AppointmentStatus> =
        raw.split(',').filter_map(|s| s.parse().ok()).collect();
    if statuses.is_empty() {
        return Err(AppError::new(ErrorCode::PurgeStatusesInvalid));
    }

    let removed = appointment::purge_by_statuses(&state.pool, &statuses).await?;
    tracing::info!(removed, statuses = %raw, "Admin purge completed");
    Ok(Json(PurgeResponse { removed }))
}

/// POST /api/admin/appointments/purge-daily-run - 手动触发每日保留清理
pub async fn purge_daily_run(State(state): State<ServerState>) -> AppResult<Json<PurgeResponse>> {
    let removed = retention::purge_expired(&state.pool, &time::today_string()).await?;
    tracing::info!(removed, "Manual retention purge completed");
    Ok(Json(PurgeResponse { removed }))
}
