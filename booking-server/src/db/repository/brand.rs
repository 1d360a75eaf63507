//! Brand Repository

use super::RepoResult;
use shared::models::Brand;
use sqlx::SqlitePool;

/// All brands ordered by name (public catalog)
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Brand>> {
    let rows = sqlx::query_as::<_, Brand>(
        "SELECT id, name, logo_url, created_at FROM brand ORDER BY name ASC",
    )
    .fetch_all(pool)
    .await?;
    Ok(rows)
}
