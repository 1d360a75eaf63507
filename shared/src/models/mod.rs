//! Data models
//!
//! Shared between the booking server and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod appointment;
pub mod branch;
pub mod brand;
pub mod table_type;

// Re-exports
pub use appointment::*;
pub use branch::*;
pub use brand::*;
pub use table_type::*;
