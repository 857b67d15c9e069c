//! Input validation helpers
//!
//! Centralized constraint constants and validation functions.
//! SQLite TEXT has no built-in length enforcement, so store names are
//! checked here before anything reaches the repository.

use shared::error::AppError;

// ── Constraint limits ───────────────────────────────────────────────

/// Store name on create/update
pub const STORE_MIN_LEN: usize = 4;
pub const STORE_MAX_LEN: usize = 10;

/// Store name in the by-store query (looser upper bound)
pub const STORE_QUERY_MAX_LEN: usize = 20;

/// Sale ids addressable through a path parameter
pub const ID_MIN: i64 = 1;
pub const ID_MAX: i64 = 1000;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a store name is within [min, max] characters.
pub fn validate_store_name(value: &str, min: usize, max: usize) -> Result<(), AppError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(AppError::validation(format!(
            "store must be between {min} and {max} characters ({len} given)"
        )));
    }
    Ok(())
}

/// Validate that a path id is within the addressable range.
pub fn validate_sale_id(id: i64) -> Result<(), AppError> {
    if !(ID_MIN..=ID_MAX).contains(&id) {
        return Err(AppError::validation(format!(
            "id must be between {ID_MIN} and {ID_MAX} ({id} given)"
        )));
    }
    Ok(())
}
