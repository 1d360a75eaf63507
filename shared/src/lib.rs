//! Shared types for the DineUp booking platform
//!
//! Common types used by the booking server and its clients: data models,
//! the unified error system and small utilities (IDs, timestamps).

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use serde::{Deserialize, Serialize};
