//! Employee Branch Repository (staff-branch assignment)
//!
//! Read-only authorization input: which branches a staff member may manage.
//! Assignment rows are administered out-of-band.

use super::RepoResult;
use sqlx::SqlitePool;

/// Branch ids assigned to a staff member, optionally filtered by brand
pub async fn branch_ids_for_user(
    pool: &SqlitePool,
    user_id: i64,
    brand_id: Option<i64>,
) -> RepoResult<Vec<i64>> {
    let rows: Vec<i64> = match brand_id {
        Some(brand_id) => {
            sqlx::query_scalar(
                "SELECT eb.branch_id FROM employee_branch eb \
                 JOIN branch b ON b.id = eb.branch_id \
                 WHERE eb.user_id = ? AND b.brand_id = ?",
            )
            .bind(user_id)
            .bind(brand_id)
            .fetch_all(pool)
            .await?
        }
        None => {
            sqlx::query_scalar("SELECT branch_id FROM employee_branch WHERE user_id = ?")
                .bind(user_id)
                .fetch_all(pool)
                .await?
        }
    };
    Ok(rows)
}

/// Whether the staff member is assigned to the given branch
pub async fn is_assigned(pool: &SqlitePool, user_id: i64, branch_id: i64) -> RepoResult<bool> {
    let count: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM employee_branch WHERE user_id = ? AND branch_id = ?",
    )
    .bind(user_id)
    .bind(branch_id)
    .fetch_one(pool)
    .await?;
    Ok(count > 0)
}
