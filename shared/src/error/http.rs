//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    ///
    /// 注意: BranchNotFound / TableTypeNotFound 映射为 400 而不是 404,
    /// 它们只在创建预约时作为请求引用出现，缺失的引用属于错误请求。
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found (missing target entity on read/update)
            Self::NotFound
            | Self::AppointmentNotFound
            | Self::AppointmentNotCancelable
            | Self::BrandNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists | Self::InvalidStatusTransition => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::NotAuthenticated
            | Self::InvalidCredentials
            | Self::TokenExpired
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,

            // 403 Forbidden
            Self::PermissionDenied
            | Self::RoleRequired
            | Self::AdminRequired
            | Self::EmployeeRequired
            | Self::BranchNotAssigned => StatusCode::FORBIDDEN,

            // 500 Internal Server Error
            Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }

            // 400 Bad Request (validation errors and creation-time missing
            // references: branch / table type)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
