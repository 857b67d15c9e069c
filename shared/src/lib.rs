//! Shared types for the ventas service
//!
//! Common types used by the server crate: error codes, the application
//! error type with its HTTP integration, and the sales data models.

pub mod error;
pub mod models;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
