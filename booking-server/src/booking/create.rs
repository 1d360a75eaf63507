//! Transactional booking write
//!
//! Capacity read, overlap count and ledger insert run in ONE transaction
//! that owns the SQLite write lock for the whole sequence, so two
//! concurrent bookings can never both observe the same pre-insert count.

use chrono::{NaiveDate, NaiveTime};
use shared::{AppError, ErrorCode};
use sqlx::SqlitePool;

use crate::utils::time::slot_start_millis;

/// 规范默认用餐时长 (分钟)
///
/// 请求未给 duration 时的落库缺省值，同时也是重叠计数里 COALESCE 的
/// 缺省值——两处必须一致，否则同一条预约在写入和计数时占用的窗口不同。
pub const DEFAULT_DURATION_MIN: i64 = 90;

/// Validated booking input (field presence/format already checked upstream)
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub user_id: i64,
    pub branch_id: i64,
    pub type_id: i64,
    pub date: NaiveDate,
    pub time: NaiveTime,
    /// Minutes; `None` falls back to [`DEFAULT_DURATION_MIN`]
    pub duration: Option<i64>,
    pub guest_count: i64,
    pub deposit_amount: f64,
    pub note: Option<String>,
}

/// Result of a booking: ledger id plus the assigned queue number
/// (`None` = seated immediately)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingOutcome {
    pub appointment_id: i64,
    pub queue_no: Option<i64>,
}

/// Queue number assignment
///
/// `total_slots <= 0` means unlimited: nobody ever queues. Otherwise the
/// first `total_slots` overlapping parties are seated (`None`) and the
/// rest queue as 1, 2, 3, ... This is valid only because the caller
/// computes `occupied` and inserts under one exclusive lock.
pub fn assign_queue_no(occupied: i64, total_slots: i64) -> Option<i64> {
    if total_slots <= 0 || occupied < total_slots {
        None
    } else {
        Some(occupied - total_slots + 1)
    }
}

/// Count active appointments whose window intersects `[start_at, end_at)`
///
/// Half-open interval rule: `existing_start < end_at AND existing_end >
/// start_at`, with `existing_end = start_at + COALESCE(duration, default) *
/// 60_000`. Only `pending`/`confirmed` rows occupy capacity.
///
/// Takes any executor: the booking write passes its transaction, the
/// availability endpoint reads through the plain pool without locking.
pub async fn count_active_overlapping<'e, E>(
    executor: E,
    branch_id: i64,
    type_id: i64,
    start_at: i64,
    end_at: i64,
) -> Result<i64, sqlx::Error>
where
    E: sqlx::Executor<'e, Database = sqlx::Sqlite>,
{
    sqlx::query_scalar(
        "SELECT COUNT(*) FROM appointment \
         WHERE branch_id = ? \
           AND type_id = ? \
           AND status IN ('pending', 'confirmed') \
           AND start_at < ? \
           AND start_at + COALESCE(duration, ?) * 60000 > ?",
    )
    .bind(branch_id)
    .bind(type_id)
    .bind(end_at)
    .bind(DEFAULT_DURATION_MIN)
    .bind(start_at)
    .fetch_one(executor)
    .await
}

/// Create an appointment: validate references, count overlaps, assign the
/// queue number and insert, atomically.
///
/// `BEGIN IMMEDIATE` 先拿写锁再读: 整个 读容量-计数-插入 序列对所有并发
/// 预订互斥，排队号既不会重复也不会超卖。出错时事务随 Drop 回滚，
/// 账本里不会留下半成品行。
pub async fn create_appointment(
    pool: &SqlitePool,
    req: BookingRequest,
) -> Result<BookingOutcome, AppError> {
    let mut tx = pool
        .begin_with("BEGIN IMMEDIATE")
        .await
        .map_err(|e| AppError::database(format!("Failed to begin booking transaction: {e}")))?;

    // Creation-time references: missing branch / table type is a bad
    // request (400), not a 404
    let branch_exists: Option<i64> = sqlx::query_scalar("SELECT id FROM branch WHERE id = ?")
        .bind(req.branch_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;
    if branch_exists.is_none() {
        return Err(AppError::new(ErrorCode::BranchNotFound));
    }

    let bounds: Option<(i64, i64)> =
        sqlx::query_as("SELECT min_capacity, max_capacity FROM table_type WHERE id = ?")
            .bind(req.type_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| AppError::database(e.to_string()))?;
    let (min_capacity, max_capacity) = match bounds {
        Some(b) => b,
        None => return Err(AppError::new(ErrorCode::TableTypeNotFound)),
    };

    if req.guest_count < min_capacity || req.guest_count > max_capacity {
        return Err(AppError::with_message(
            ErrorCode::GuestCountOutOfRange,
            format!("guest_count must be between {min_capacity} and {max_capacity}"),
        ));
    }

    // Capacity registry: no row or total_slots <= 0 = unlimited
    let total_slots: i64 = sqlx::query_scalar(
        "SELECT total_slots FROM branch_table_type WHERE branch_id = ? AND type_id = ?",
    )
    .bind(req.branch_id)
    .bind(req.type_id)
    .fetch_optional(&mut *tx)
    .await
    .map_err(|e| AppError::database(e.to_string()))?
    .unwrap_or(0);

    let start_at = slot_start_millis(req.date, req.time);
    let end_at = start_at + req.duration.unwrap_or(DEFAULT_DURATION_MIN) * 60_000;

    let occupied = count_active_overlapping(&mut *tx, req.branch_id, req.type_id, start_at, end_at)
        .await
        .map_err(|e| AppError::database(e.to_string()))?;

    let queue_no = assign_queue_no(occupied, total_slots);

    let id = shared::util::snowflake_id();
    let now = shared::util::now_millis();
    sqlx::query(
        "INSERT INTO appointment \
         (id, user_id, branch_id, type_id, date, time, start_at, duration, guest_count, \
          deposit_amount, note, status, employee_id, queue_no, created_at) \
         VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, 'pending', NULL, ?, ?)",
    )
    .bind(id)
    .bind(req.user_id)
    .bind(req.branch_id)
    .bind(req.type_id)
    .bind(req.date.format("%Y-%m-%d").to_string())
    .bind(req.time.format("%H:%M").to_string())
    .bind(start_at)
    .bind(req.duration)
    .bind(req.guest_count)
    .bind(req.deposit_amount)
    .bind(req.note.as_deref())
    .bind(queue_no)
    .bind(now)
    .execute(&mut *tx)
    .await
    .map_err(|e| AppError::database(format!("Failed to insert appointment: {e}")))?;

    tx.commit()
        .await
        .map_err(|e| AppError::database(format!("Failed to commit booking: {e}")))?;

    tracing::info!(
        appointment_id = id,
        branch_id = req.branch_id,
        type_id = req.type_id,
        occupied,
        total_slots,
        queue_no = ?queue_no,
        "Appointment created"
    );

    Ok(BookingOutcome {
        appointment_id: id,
        queue_no,
    })
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_queue_no_unlimited() {
        // total_slots <= 0 = unlimited, never queue
        assert_eq!(assign_queue_no(0, 0), None);
        assert_eq!(assign_queue_no(500, 0), None);
        assert_eq!(assign_queue_no(3, -1), None);
    }

    #[test]
    fn test_queue_no_below_capacity() {
        assert_eq!(assign_queue_no(0, 2), None);
        assert_eq!(assign_queue_no(1, 2), None);
    }

    #[test]
    fn test_queue_no_at_and_beyond_capacity() {
        // The (N+1)th overlapping booking gets queue 1, then 2, 3, ...
        assert_eq!(assign_queue_no(2, 2), Some(1));
        assert_eq!(assign_queue_no(3, 2), Some(2));
        assert_eq!(assign_queue_no(10, 2), Some(9));
        assert_eq!(assign_queue_no(1, 1), Some(1));
    }
}
