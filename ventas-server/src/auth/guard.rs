//! Bearer-token guard for protected routes

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::AppError;

use crate::auth::token::validate_token;
use crate::state::AppState;

/// Middleware that verifies the bearer JWT and its identity claim
///
/// Pass/fail only: on success the request proceeds unchanged. A token that
/// fails validation yields 401; a valid token for any identity other than
/// the configured login email yields 403.
pub async fn auth_guard(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .ok_or_else(AppError::unauthorized)?;

    let token = auth_header
        .strip_prefix("Bearer ")
        .ok_or_else(AppError::unauthorized)?;

    let claims = validate_token(token, &state.jwt_secret).map_err(|e| {
        tracing::debug!("JWT validation failed: {e}");
        AppError::invalid_token()
    })?;

    if claims.email != state.login_email {
        return Err(AppError::permission_denied());
    }

    Ok(next.run(request).await)
}
