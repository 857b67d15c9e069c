//! API routes for ventas-server

pub mod home;
pub mod login;
pub mod sales;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::auth::guard::auth_guard;
use crate::state::AppState;

/// Create the combined router
///
/// The guarded set is declared here, not per-handler: listing and every
/// mutating sales operation sit behind the bearer-token guard; by-id and
/// by-store reads, login, and the informational root stay public.
pub fn create_router(state: AppState) -> Router {
    let static_dir = state.static_dir.clone();

    // Guarded sales surface (bearer token + identity check)
    let guarded = sales::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    // Public sales reads
    let public = sales::public_routes();

    Router::new()
        .route("/", get(home::index))
        .route("/test_favicon", get(home::test_favicon))
        .route("/login", post(login::login))
        .merge(guarded)
        .merge(public)
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
