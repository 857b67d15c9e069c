//! Sale Model

use serde::{Deserialize, Serialize};

/// Sale entity
///
/// `id` is assigned by the repository on insert and immutable thereafter.
/// `date` is free-form text; no calendar validation is performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Sale {
    pub id: i64,
    pub date: String,
    pub store: String,
    pub amount: f64,
}

/// Create sale payload
///
/// Clients may supply an `id`; the repository honors it when present and
/// lets the store assign one otherwise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleCreate {
    pub id: Option<i64>,
    pub date: String,
    pub store: String,
    pub amount: f64,
}

/// Update sale payload
///
/// All three mutable fields are overwritten together; a supplied `id` in
/// the body is ignored (the path parameter is authoritative).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleUpdate {
    pub date: String,
    pub store: String,
    pub amount: f64,
}
