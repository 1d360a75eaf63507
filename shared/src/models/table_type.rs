//! Table Type Model
//!
//! A table type defines the guest-capacity range used to validate bookings.
//! The per-branch slot count lives in `branch_table_type` (the capacity
//! registry); `total_slots <= 0` or a missing row means unlimited.

use serde::{Deserialize, Serialize};

/// Table type entity (桌型)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct TableType {
    pub id: i64,
    pub name: String,
    pub min_capacity: i64,
    pub max_capacity: i64,
    pub min_spend: f64,
    pub created_at: i64,
}

/// Capacity registry row: (branch, table type) → configured slot count
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BranchTableType {
    pub branch_id: i64,
    pub type_id: i64,
    pub total_slots: i64,
}

/// Capacity registry row joined with the table type (availability listing)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BranchTableTypeDetail {
    pub branch_id: i64,
    pub type_id: i64,
    pub name: String,
    pub min_capacity: i64,
    pub max_capacity: i64,
    pub total_slots: i64,
}
