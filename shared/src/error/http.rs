//! HTTP status code and wire-format mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            // InvalidCredentials is deliberately 404, not 401: login
            // failures read as "not found" in the API contract.
            Self::NotFound | Self::InvalidCredentials => StatusCode::NOT_FOUND,

            // 401 Unauthorized
            Self::NotAuthenticated | Self::TokenExpired | Self::TokenInvalid => {
                StatusCode::UNAUTHORIZED
            }

            // 403 Forbidden
            Self::PermissionDenied => StatusCode::FORBIDDEN,

            // 422 Unprocessable Entity (shape/constraint checks)
            Self::ValidationFailed => StatusCode::UNPROCESSABLE_ENTITY,

            // 500 Internal Server Error
            Self::Unknown | Self::InternalError | Self::DatabaseError | Self::ConfigError => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// JSON key used when this error is serialized into a response body.
    ///
    /// Every error body is a single-key object: guard-level rejections use
    /// `detail`, everything else uses `mensaje`.
    pub const fn wire_key(&self) -> &'static str {
        match self {
            Self::NotAuthenticated
            | Self::TokenExpired
            | Self::TokenInvalid
            | Self::PermissionDenied => "detail",
            _ => "mensaje",
        }
    }
}
