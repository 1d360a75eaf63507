//! Appointment API Handlers (顾客侧)

use axum::{
    Json,
    extract::{Extension, Path, State},
    http::StatusCode,
};

use shared::models::AppointmentWithQueue;
use shared::{AppError, AppResult, ErrorCode};

use crate::auth::CurrentUser;
use crate::booking::{self, BookingRequest};
use crate::core::ServerState;
use crate::db::repository::appointment;
use crate::utils::time::{parse_date, parse_time};
use crate::utils::validation::{
    MAX_NOTE_LEN, validate_non_negative, validate_optional_text, validate_positive,
};

/// Booking payload; field presence is validated by hand so that a missing
/// field is a clean 400 instead of a deserialization rejection
#[derive(serde::Deserialize)]
pub struct CreateAppointmentPayload {
    pub branch_id: Option<i64>,
    pub type_id: Option<i64>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub duration: Option<i64>,
    pub guest_count: Option<i64>,
    pub deposit_amount: Option<f64>,
    pub note: Option<String>,
}

#[derive(serde::Serialize)]
pub struct CreateAppointmentResponse {
    pub appointment_id: i64,
    pub queue_no: Option<i64>,
}

#[derive(serde::Serialize)]
pub struct MyAppointmentsResponse {
    pub appointments: Vec<AppointmentWithQueue>,
}

#[derive(serde::Serialize)]
pub struct CancelResponse {
    pub canceled: bool,
}

/// POST /api/appointments - 创建预约
///
/// 座位够 → `queue_no` 为 null (立即入座)；已满 → 返回排队号。
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CreateAppointmentPayload>,
) -> AppResult<(StatusCode, Json<CreateAppointmentResponse>)> {
    let (Some(branch_id), Some(type_id), Some(date), Some(time), Some(guest_count)) = (
        payload.branch_id,
        payload.type_id,
        payload.date.as_deref(),
        payload.time.as_deref(),
        payload.guest_count,
    ) else {
        return Err(AppError::validation(
            "branch_id, type_id, date, time and guest_count are required",
        ));
    };

    validate_positive(guest_count, "guest_count")?;
    if let Some(duration) = payload.duration {
        validate_positive(duration, "duration")?;
    }
    let deposit_amount = payload.deposit_amount.unwrap_or(0.0);
    validate_non_negative(deposit_amount, "deposit_amount")?;
    validate_optional_text(&payload.note, "note", MAX_NOTE_LEN)?;

    let request = BookingRequest {
        user_id: user.id,
        branch_id,
        type_id,
        date: parse_date(date)?,
        time: parse_time(time)?,
        duration: payload.duration,
        guest_count,
        deposit_amount,
        note: payload.note,
    };

    let outcome = booking::create_appointment(&state.pool, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(CreateAppointmentResponse {
            appointment_id: outcome.appointment_id,
            queue_no: outcome.queue_no,
        }),
    ))
}

/// GET /api/appointments/my - 我的预约 (含 queues_before)
pub async fn my_appointments(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
) -> AppResult<Json<MyAppointmentsResponse>> {
    let appointments = appointment::find_by_user_with_queue(&state.pool, user.id).await?;
    Ok(Json(MyAppointmentsResponse { appointments }))
}

/// PATCH /api/appointments/:id/cancel - 取消自己的预约
///
/// 只有 pending/confirmed 可取消；找不到、不属于本人或已是终态都按
/// 404 处理，不泄露他人预约的存在。
pub async fn cancel(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<i64>,
) -> AppResult<Json<CancelResponse>> {
    let canceled = appointment::cancel_by_owner(&state.pool, id, user.id).await?;
    if !canceled {
        return Err(AppError::new(ErrorCode::AppointmentNotCancelable));
    }
    Ok(Json(CancelResponse { canceled: true }))
}
