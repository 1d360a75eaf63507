//! Table Type Repository

use super::RepoResult;
use shared::models::TableType;
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<TableType>> {
    let row = sqlx::query_as::<_, TableType>(
        "SELECT id, name, min_capacity, max_capacity, min_spend, created_at FROM table_type WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}
