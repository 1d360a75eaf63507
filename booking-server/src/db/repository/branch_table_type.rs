//! Branch Table Type Repository (capacity registry)

use super::RepoResult;
use shared::models::BranchTableTypeDetail;
use sqlx::SqlitePool;

/// Configured slot count for a (branch, table type) pair
///
/// `None` means no row is configured; callers treat that (and any value
/// <= 0) as unlimited capacity.
pub async fn find_slots(
    pool: &SqlitePool,
    branch_id: i64,
    type_id: i64,
) -> RepoResult<Option<i64>> {
    let slots: Option<i64> = sqlx::query_scalar(
        "SELECT total_slots FROM branch_table_type WHERE branch_id = ? AND type_id = ?",
    )
    .bind(branch_id)
    .bind(type_id)
    .fetch_optional(pool)
    .await?;
    Ok(slots)
}

/// Table types configured for one branch, with capacity bounds
pub async fn find_by_branch(
    pool: &SqlitePool,
    branch_id: i64,
) -> RepoResult<Vec<BranchTableTypeDetail>> {
    let rows = sqlx::query_as::<_, BranchTableTypeDetail>(
        "SELECT btt.branch_id, btt.type_id, tt.name, tt.min_capacity, tt.max_capacity, btt.total_slots \
         FROM branch_table_type btt \
         JOIN table_type tt ON tt.id = btt.type_id \
         WHERE btt.branch_id = ? \
         ORDER BY tt.min_capacity, tt.max_capacity, tt.name",
    )
    .bind(branch_id)
    .fetch_all(pool)
    .await?;
    Ok(rows)
}

/// Every configured (branch, table type) pairing (public catalog)
pub async fn find_all_details(pool: &SqlitePool) -> RepoResult<Vec<BranchTableTypeDetail>> {
    let rows = sqlx::query_as::<_, BranchTableTypeDetail>(
        "SELECT btt.branch_id, btt.type_id, tt.name, tt.min_capacity, tt.max_capacity, btt.total_slots \
         FROM branch_table_type btt \
         JOIN table_type tt ON tt.id = btt.type_id \
         ORDER BY btt.branch_id, tt.min_capacity, tt.max_capacity, tt.name",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
