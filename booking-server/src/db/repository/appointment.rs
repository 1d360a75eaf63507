//! Appointment Repository
//!
//! Read/update queries over the reservation ledger. Creation is NOT here:
//! the insert must run inside the locked booking transaction and lives in
//! [`crate::booking`].

use super::RepoResult;
use shared::models::{Appointment, AppointmentDetail, AppointmentStatus, AppointmentWithQueue};
use sqlx::{QueryBuilder, Sqlite, SqlitePool};

const APPOINTMENT_DETAIL_SELECT: &str = "SELECT a.id, a.user_id, a.branch_id, a.type_id, a.date, a.time, a.duration, a.guest_count, a.deposit_amount, a.note, a.status, a.employee_id, a.queue_no, a.created_at, b.name AS branch_name, br.name AS brand_name, tt.name AS type_name FROM appointment a JOIN branch b ON b.id = a.branch_id LEFT JOIN brand br ON br.id = b.brand_id JOIN table_type tt ON tt.id = a.type_id";

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Appointment>> {
    let row = sqlx::query_as::<_, Appointment>(
        "SELECT id, user_id, branch_id, type_id, date, time, start_at, duration, guest_count, deposit_amount, note, status, employee_id, queue_no, created_at FROM appointment WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Full ledger listing with joined names (admin view)
pub async fn find_all_details(pool: &SqlitePool) -> RepoResult<Vec<AppointmentDetail>> {
    let sql = format!(
        "{} ORDER BY a.date DESC, a.time DESC, a.id DESC",
        APPOINTMENT_DETAIL_SELECT
    );
    let rows = sqlx::query_as::<_, AppointmentDetail>(&sql)
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// A customer's own appointments, each augmented with `queues_before`
///
/// `queues_before` deliberately uses an exact (branch, type, date, time)
/// slot match rather than the booking-time interval overlap: it answers
/// "how many parties on my exact slot are still ahead of me", recomputed
/// on every read so cancellations are reflected immediately.
pub async fn find_by_user_with_queue(
    pool: &SqlitePool,
    user_id: i64,
) -> RepoResult<Vec<AppointmentWithQueue>> {
    let rows = sqlx::query_as::<_, AppointmentWithQueue>(
        "SELECT a.id, a.branch_id, a.type_id, a.date, a.time, a.duration, a.guest_count, \
         a.deposit_amount, a.note, a.status, a.queue_no, a.created_at, \
         b.name AS branch_name, tt.name AS type_name, \
         CASE WHEN a.queue_no IS NULL THEN 0 ELSE ( \
             SELECT COUNT(*) FROM appointment x \
             WHERE x.branch_id = a.branch_id \
               AND x.type_id = a.type_id \
               AND x.date = a.date \
               AND x.time = a.time \
               AND x.status IN ('pending', 'confirmed') \
               AND x.created_at < a.created_at \
         ) END AS queues_before \
         FROM appointment a \
         JOIN branch b ON b.id = a.branch_id \
         JOIN table_type tt ON tt.id = a.type_id \
         WHERE a.user_id = ? \
         ORDER BY a.date DESC, a.time DESC, a.id DESC",
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Owner-side cancel: only `pending`/`confirmed` rows can be canceled.
///
/// Single guarded UPDATE so a concurrent status change cannot race the
/// check; returns false when the row is missing, owned by someone else or
/// already terminal.
pub async fn cancel_by_owner(pool: &SqlitePool, id: i64, user_id: i64) -> RepoResult<bool> {
    let rows = sqlx::query(
        "UPDATE appointment SET status = 'canceled' \
         WHERE id = ? AND user_id = ? AND status IN ('pending', 'confirmed')",
    )
    .bind(id)
    .bind(user_id)
    .execute(pool)
    .await?;
    Ok(rows.rows_affected() > 0)
}

/// Staff-side status change, guarded on the expected current status.
///
/// The caller validates the transition against
/// [`AppointmentStatus::can_transition_to`]; the `status = ?` guard makes
/// the update a no-op if another request changed the row in between.
/// Records the acting staff member in `employee_id`.
pub async fn set_status(
    pool: &SqlitePool,
    id: i64,
    from: AppointmentStatus,
    to: AppointmentStatus,
    employee_id: i64,
) -> RepoResult<bool> {
    let rows = sqlx::query("UPDATE appointment SET status = ?, employee_id = ? WHERE id = ? AND status = ?")
        .bind(to)
        .bind(employee_id)
        .bind(id)
        .bind(from)
        .execute(pool)
        .await?;
    Ok(rows.rows_affected() > 0)
}

/// Filters for the staff queue listing
#[derive(Debug, Default, Clone)]
pub struct BranchQueueFilter {
    /// Exact calendar date (YYYY-MM-DD)
    pub date: Option<String>,
    /// Status subset; empty = all statuses
    pub statuses: Vec<AppointmentStatus>,
}

/// Appointments of the given branches (staff view), newest slot first
pub async fn find_for_branches(
    pool: &SqlitePool,
    branch_ids: &[i64],
    filter: &BranchQueueFilter,
) -> RepoResult<Vec<AppointmentDetail>> {
    if branch_ids.is_empty() {
        return Ok(Vec::new());
    }

    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new(APPOINTMENT_DETAIL_SELECT);
    qb.push(" WHERE a.branch_id IN (");
    let mut ids = qb.separated(", ");
    for id in branch_ids {
        ids.push_bind(*id);
    }
    qb.push(")");

    if let Some(date) = &filter.date {
        qb.push(" AND a.date = ").push_bind(date.clone());
    }

    if !filter.statuses.is_empty() {
        qb.push(" AND a.status IN (");
        let mut statuses = qb.separated(", ");
        for status in &filter.statuses {
            statuses.push_bind(*status);
        }
        qb.push(")");
    }

    qb.push(" ORDER BY a.date DESC, a.time DESC, a.id DESC");

    let rows = qb
        .build_query_as::<AppointmentDetail>()
        .fetch_all(pool)
        .await?;
    Ok(rows)
}

/// Admin purge: delete every row whose status is in the given set,
/// regardless of date. Distinct from the retention sweeper on purpose:
/// this is the manual "clear the board" operation.
pub async fn purge_by_statuses(
    pool: &SqlitePool,
    statuses: &[AppointmentStatus],
) -> RepoResult<u64> {
    if statuses.is_empty() {
        return Ok(0);
    }

    let mut qb: QueryBuilder<Sqlite> = QueryBuilder::new("DELETE FROM appointment WHERE status IN (");
    let mut sep = qb.separated(", ");
    for status in statuses {
        sep.push_bind(*status);
    }
    qb.push(")");

    let result = qb.build().execute(pool).await?;
    Ok(result.rows_affected())
}
