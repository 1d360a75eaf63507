//! Availability API Handlers
//!
//! 只读展示接口: 不加锁地复用预约核心的重叠计数。展示值可能在下一刻
//! 就过期，真正的席位判定只发生在预订事务里。

use axum::{
    Json,
    extract::{Query, State},
};

use shared::models::BranchTableTypeDetail;
use shared::{AppError, AppResult};

use crate::booking::{self, DEFAULT_DURATION_MIN};
use crate::core::ServerState;
use crate::db::repository::branch_table_type;
use crate::utils::time::{parse_date, parse_time, slot_start_millis};

#[derive(serde::Deserialize)]
pub struct TableTypesQuery {
    pub branch_id: Option<i64>,
}

#[derive(serde::Serialize)]
pub struct TableTypesResponse {
    pub items: Vec<BranchTableTypeDetail>,
}

#[derive(serde::Deserialize)]
pub struct RemainingQuery {
    pub branch_id: Option<i64>,
    pub type_id: Option<i64>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<i64>,
}

/// `remaining` is null when the pairing has unlimited capacity
#[derive(serde::Serialize)]
pub struct RemainingResponse {
    pub total: i64,
    pub booked: i64,
    pub remaining: Option<i64>,
}

/// GET /api/availability/table-types?branch_id=.. - 分店的桌型与容量
pub async fn table_types(
    State(state): State<ServerState>,
    Query(query): Query<TableTypesQuery>,
) -> AppResult<Json<TableTypesResponse>> {
    let branch_id = query
        .branch_id
        .ok_or_else(|| AppError::validation("branch_id is required"))?;
    let items = branch_table_type::find_by_branch(&state.pool, branch_id).await?;
    Ok(Json(TableTypesResponse { items }))
}

/// GET /api/availability/remaining - 时间窗内的余位
///
/// 返回 { total, booked, remaining }; 不配置槽位 (无限) 时 remaining
/// 为 null。
pub async fn remaining(
    State(state): State<ServerState>,
    Query(query): Query<RemainingQuery>,
) -> AppResult<Json<RemainingResponse>> {
    let (Some(branch_id), Some(type_id), Some(date), Some(time)) = (
        query.branch_id,
        query.type_id,
        query.date.as_deref(),
        query.time.as_deref(),
    ) else {
        return Err(AppError::validation(
            "branch_id, type_id, date and time are required",
        ));
    };

    let start_at = slot_start_millis(parse_date(date)?, parse_time(time)?);
    let end_at = start_at + query.duration.unwrap_or(DEFAULT_DURATION_MIN) * 60_000;

    let total = branch_table_type::find_slots(&state.pool, branch_id, type_id)
        .await?
        .unwrap_or(0);

    let booked =
        booking::count_active_overlapping(&state.pool, branch_id, type_id, start_at, end_at)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;

    let remaining = if total > 0 {
        Some((total - booked).max(0))
    } else {
        None
    };

    Ok(Json(RemainingResponse {
        total,
        booked,
        remaining,
    }))
}
