//! ventas-server — Sales management HTTP API
//!
//! Small long-running service that:
//! - Persists Sale records in a single SQLite table
//! - Exposes CRUD endpoints over them, with a bearer-token guard on the
//!   listing and mutating routes
//! - Issues JWTs for the single configured login identity

pub mod api;
pub mod auth;
pub mod config;
pub mod db;
pub mod state;
pub mod utils;
