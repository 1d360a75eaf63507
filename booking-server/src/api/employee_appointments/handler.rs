//! Employee Appointment API Handlers
//!
//! 员工只能看到/操作自己所属分店的排队，归属关系查 employee_branch。

use axum::{
    Json,
    extract::{Extension, Path, Query, State},
};

use shared::models::{AppointmentDetail, AppointmentStatus};
use shared::{AppError, AppResult, ErrorCode};

use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::appointment::{self, BranchQueueFilter};
use crate::db::repository::employee_branch;

#[derive(serde::Deserialize)]
pub struct QueueListQuery {
    /// Exact calendar date filter (YYYY-MM-DD)
    pub date: Option<String>,
    /// Comma-separated status list; unknown values are ignored
    pub status: Option<String>,
    /// Restrict to branches of one brand
    pub brand_id: Option<i64>,
}

#[derive(serde::Serialize)]
pub struct QueueListResponse {
    pub appointments: Vec<AppointmentDetail>,
}

#[derive(serde::Deserialize)]
pub struct StatusPayload {
    pub status: Option<String>,
}

#[derive(serde::Serialize)]
pub struct StatusUpdateResponse {
    pub updated: bool,
    pub status: AppointmentStatus,
}

/// GET /api/employee/appointments - 本人分店的排队列表
///
/// 可选过滤: date (精确日期), status (逗号分隔), brand_id
pub async fn list(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Query(query): Query<QueueListQuery>,
) -> AppResult<Json<QueueListResponse>> {
    let branch_ids =
        employee_branch::branch_ids_for_user(&state.pool, user.id, query.brand_id).await?;
    if branch_ids.is_empty() {
        return Ok(Json(QueueListResponse {
            appointments: Vec::new(),
        }));
    }

    let statuses: Vec<AppointmentStatus> = query
        .status
        .as_deref()
        .unwrap_or("")
        .split(',')
        .filter_map(|s| s.parse().ok())
        .collect();

    let filter = BranchQueueFilter {
        date: query.date,
        statuses,
    };
    let appointments = appointment::find_for_branches(&state.pool, &branch_ids, &filter).await?;
    Ok(Json(QueueListResponse { appointments }))
}

/// PATCH /api/employee/appointments/:id/status - 修改预约状态
///
/// 仅限本人分店 (403)，且只接受单调的状态流转:
/// pending → confirmed → completed, 活跃状态 → canceled。
pub async fn update_status(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
    Json(payload): Json<StatusPayload>,
) -> AppResult<Json<StatusUpdateResponse>> {
    let next: AppointmentStatus = payload
        .status
        .as_deref()
        .unwrap_or("")
        .parse()
        .map_err(|e: String| AppError::with_message(ErrorCode::InvalidStatus, e))?;

    let row = appointment::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::AppointmentNotFound))?;

    if !employee_branch::is_assigned(&state.pool, user.id, row.branch_id).await? {
        return Err(AppError::new(ErrorCode::BranchNotAssigned));
    }

    if !row.status.can_transition_to(next) {
        return Err(AppError::with_message(
            ErrorCode::InvalidStatusTransition,
            format!("Cannot change status from {} to {}", row.status, next),
        ));
    }

    // Guarded on the status we just read; a racing update makes this a no-op
    let updated = appointment::set_status(&state.pool, id, row.status, next, user.id).await?;
    if !updated {
        return Err(AppError::with_message(
            ErrorCode::InvalidStatusTransition,
            "Appointment status changed concurrently",
        ));
    }

    Ok(Json(StatusUpdateResponse {
        updated: true,
        status: next,
    }))
}
