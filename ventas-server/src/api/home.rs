//! Informational root and favicon probe

use axum::extract::State;
use axum::http::header;
use axum::response::{Html, IntoResponse, Response};
use shared::error::AppError;

use crate::state::AppState;

/// GET / - informational landing page
pub async fn index() -> Html<&'static str> {
    Html("<h2>Ventas API</h2>")
}

/// GET /test_favicon - verify that the favicon is readable from the static dir
pub async fn test_favicon(State(state): State<AppState>) -> Result<Response, AppError> {
    let path = std::path::Path::new(&state.static_dir).join("favicon.ico");
    let content = tokio::fs::read(&path).await.map_err(|e| {
        tracing::error!("Favicon read failed: {e}");
        AppError::internal("favicon not available")
    })?;
    Ok(([(header::CONTENT_TYPE, "image/x-icon")], content).into_response())
}
