//! Branch Repository

use super::RepoResult;
use shared::models::{Branch, BranchWithBrand};
use sqlx::SqlitePool;

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Branch>> {
    let row = sqlx::query_as::<_, Branch>(
        "SELECT id, brand_id, name, address, phone, image_url, created_at FROM branch WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// All branches with their brand name (public catalog)
pub async fn find_all_with_brand(pool: &SqlitePool) -> RepoResult<Vec<BranchWithBrand>> {
    let rows = sqlx::query_as::<_, BranchWithBrand>(
        "SELECT b.id, b.brand_id, b.name, b.address, b.phone, b.image_url, b.created_at, \
         br.name AS brand_name \
         FROM branch b \
         LEFT JOIN brand br ON br.id = b.brand_id \
         ORDER BY b.id ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
