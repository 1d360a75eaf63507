//! Brand Model

use serde::{Deserialize, Serialize};

/// Brand entity (品牌)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Brand {
    pub id: i64,
    pub name: String,
    pub logo_url: Option<String>,
    pub created_at: i64,
}
