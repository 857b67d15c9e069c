//! Unified error system for the ventas service
//!
//! - [`ErrorCode`]: standardized error codes for all error types
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: error type carrying a code and a client-facing message
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode};
//!
//! // Default message for the code
//! let err = AppError::new(ErrorCode::NotFound);
//!
//! // Custom message
//! let err = AppError::with_message(ErrorCode::NotFound, "Sale 7 does not exist");
//!
//! // Constraint check failure
//! let err = AppError::validation("store must be between 4 and 10 characters");
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{AppError, AppResult};
