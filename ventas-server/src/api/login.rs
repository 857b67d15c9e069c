//! Authentication endpoint: login

use axum::{Json, extract::State};
use serde::Deserialize;
use shared::error::{AppError, ErrorCode};

use crate::auth::token::create_token;
use crate::state::AppState;

/// POST /login
#[derive(Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub secret: String,
}

/// Check the submitted pair against the configured credentials and issue a
/// bearer token. The success body is the bare token string.
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<String>, AppError> {
    if req.email != state.login_email || req.secret != state.login_secret {
        return Err(AppError::invalid_credentials());
    }

    let token = create_token(&req.email, &state.jwt_secret).map_err(|e| {
        tracing::error!("JWT creation failed: {e}");
        AppError::new(ErrorCode::InternalError)
    })?;

    Ok(Json(token))
}
