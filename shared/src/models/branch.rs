//! Branch Model

use serde::{Deserialize, Serialize};

/// Branch entity (门店/分店)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Branch {
    pub id: i64,
    pub brand_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub created_at: i64,
}

/// Branch with joined brand name (catalog listing)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BranchWithBrand {
    pub id: i64,
    pub brand_id: i64,
    pub name: String,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub image_url: Option<String>,
    pub created_at: i64,
    pub brand_name: Option<String>,
}
