//! Unified error codes for the DineUp booking platform
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Appointment errors
//! - 7xxx: Catalog errors (brand / branch / table type)
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,
    /// Employee role required
    EmployeeRequired = 2004,
    /// Appointment's branch is outside the caller's assigned branches
    BranchNotAssigned = 2005,

    // ==================== 4xxx: Appointment ====================
    /// Appointment not found
    AppointmentNotFound = 4001,
    /// Appointment cannot be canceled (already completed or canceled)
    AppointmentNotCancelable = 4002,
    /// Status transition not allowed
    InvalidStatusTransition = 4003,
    /// Unknown appointment status value
    InvalidStatus = 4004,
    /// Guest count outside the table type's capacity range
    GuestCountOutOfRange = 4005,
    /// Purge request named no valid statuses
    PurgeStatusesInvalid = 4006,

    // ==================== 7xxx: Catalog ====================
    /// Branch not found
    BranchNotFound = 7001,
    /// Table type not found
    TableTypeNotFound = 7002,
    /// Brand not found
    BrandNotFound = 7003,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9003,
}

impl ErrorCode {
    /// Get the numeric code value
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the default human-readable message for this error code
    pub fn message(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Unknown => "Unknown error",
            Self::ValidationFailed => "Validation failed",
            Self::NotFound => "Resource not found",
            Self::AlreadyExists => "Resource already exists",
            Self::InvalidRequest => "Invalid request",
            Self::RequiredField => "Required field missing",
            Self::ValueOutOfRange => "Value out of range",

            Self::NotAuthenticated => "Authentication required",
            Self::InvalidCredentials => "Invalid username or password",
            Self::TokenExpired => "Token expired",
            Self::TokenInvalid => "Invalid token",

            Self::PermissionDenied => "Permission denied",
            Self::RoleRequired => "Insufficient role",
            Self::AdminRequired => "Admin role required",
            Self::EmployeeRequired => "Employee role required",
            Self::BranchNotAssigned => "Branch not assigned to this employee",

            Self::AppointmentNotFound => "Appointment not found",
            Self::AppointmentNotCancelable => "Appointment not found or not cancelable",
            Self::InvalidStatusTransition => "Status transition not allowed",
            Self::InvalidStatus => "Invalid appointment status",
            Self::GuestCountOutOfRange => "Guest count outside table capacity",
            Self::PurgeStatusesInvalid => "No valid statuses given",

            Self::BranchNotFound => "Branch not found",
            Self::TableTypeNotFound => "Table type not found",
            Self::BrandNotFound => "Brand not found",

            Self::InternalError => "Internal server error",
            Self::DatabaseError => "Database error",
            Self::ConfigError => "Configuration error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl TryFrom<u16> for ErrorCode {
    type Error = String;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Success),
            1 => Ok(Self::Unknown),
            2 => Ok(Self::ValidationFailed),
            3 => Ok(Self::NotFound),
            4 => Ok(Self::AlreadyExists),
            5 => Ok(Self::InvalidRequest),
            7 => Ok(Self::RequiredField),
            8 => Ok(Self::ValueOutOfRange),

            1001 => Ok(Self::NotAuthenticated),
            1002 => Ok(Self::InvalidCredentials),
            1003 => Ok(Self::TokenExpired),
            1004 => Ok(Self::TokenInvalid),

            2001 => Ok(Self::PermissionDenied),
            2002 => Ok(Self::RoleRequired),
            2003 => Ok(Self::AdminRequired),
            2004 => Ok(Self::EmployeeRequired),
            2005 => Ok(Self::BranchNotAssigned),

            4001 => Ok(Self::AppointmentNotFound),
            4002 => Ok(Self::AppointmentNotCancelable),
            4003 => Ok(Self::InvalidStatusTransition),
            4004 => Ok(Self::InvalidStatus),
            4005 => Ok(Self::GuestCountOutOfRange),
            4006 => Ok(Self::PurgeStatusesInvalid),

            7001 => Ok(Self::BranchNotFound),
            7002 => Ok(Self::TableTypeNotFound),
            7003 => Ok(Self::BrandNotFound),

            9001 => Ok(Self::InternalError),
            9002 => Ok(Self::DatabaseError),
            9003 => Ok(Self::ConfigError),

            _ => Err(format!("Unknown error code: {}", value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::NotAuthenticated,
            ErrorCode::BranchNotAssigned,
            ErrorCode::AppointmentNotFound,
            ErrorCode::TableTypeNotFound,
            ErrorCode::DatabaseError,
        ] {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value), Ok(code));
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        assert!(ErrorCode::try_from(65535).is_err());
    }
}
