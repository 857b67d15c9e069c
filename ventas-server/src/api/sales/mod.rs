//! Sales API module

mod handler;

use axum::{
    Router,
    routing::{get, put},
};

use crate::state::AppState;

/// Routes gated by the auth guard: listing and every mutation.
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/sales", get(handler::list).post(handler::create))
        .route("/sales/{id}", put(handler::update).delete(handler::delete))
}

/// Public reads: by id and by store.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/sales/{id}", get(handler::get_by_id))
        .route("/sales/", get(handler::list_by_store))
}
