//! Sales API handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;
use serde_json::{Value, json};
use shared::error::{AppError, ErrorCode};
use shared::models::{Sale, SaleCreate, SaleUpdate};

use crate::db::sales;
use crate::state::AppState;
use crate::utils::validation::{
    STORE_MAX_LEN, STORE_MIN_LEN, STORE_QUERY_MAX_LEN, validate_sale_id, validate_store_name,
};

type ApiResult<T> = Result<Json<T>, AppError>;

fn db_error(e: sqlx::Error) -> AppError {
    tracing::error!("Sales db error: {e}");
    AppError::new(ErrorCode::DatabaseError)
}

/// GET /sales - list every sale (guarded)
pub async fn list(State(state): State<AppState>) -> ApiResult<Vec<Sale>> {
    let rows = sales::list_all(&state.pool).await.map_err(db_error)?;
    Ok(Json(rows))
}

/// GET /sales/{id} - fetch a single sale (public)
pub async fn get_by_id(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Sale> {
    validate_sale_id(id)?;

    let sale = sales::find_by_id(&state.pool, id)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            AppError::not_found(format!("Sale {id} does not exist, cannot be shown"))
        })?;
    Ok(Json(sale))
}

/// GET /sales/?store=… - sales for one store (public)
#[derive(Deserialize)]
pub struct StoreQuery {
    pub store: String,
}

pub async fn list_by_store(
    State(state): State<AppState>,
    Query(query): Query<StoreQuery>,
) -> ApiResult<Vec<Sale>> {
    validate_store_name(&query.store, STORE_MIN_LEN, STORE_QUERY_MAX_LEN)?;

    let rows = sales::list_by_store(&state.pool, &query.store)
        .await
        .map_err(db_error)?;
    if rows.is_empty() {
        return Err(AppError::not_found(format!(
            "Store {} does not exist, cannot be shown",
            query.store
        )));
    }
    Ok(Json(rows))
}

/// POST /sales - register a new sale (guarded)
///
/// Echoes the stored row so clients see the id the repository assigned.
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<SaleCreate>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    validate_store_name(&payload.store, STORE_MIN_LEN, STORE_MAX_LEN)?;

    let sale = sales::insert(&state.pool, &payload)
        .await
        .map_err(db_error)?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "mensaje": "New sale registered",
            "sale": sale,
        })),
    ))
}

/// PUT /sales/{id} - overwrite an existing sale (guarded)
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<SaleUpdate>,
) -> ApiResult<Value> {
    validate_store_name(&payload.store, STORE_MIN_LEN, STORE_MAX_LEN)?;

    let sale = sales::update(&state.pool, id, &payload)
        .await
        .map_err(db_error)?
        .ok_or_else(|| {
            AppError::not_found(format!("Sale {id} does not exist, cannot be updated"))
        })?;

    Ok(Json(json!({
        "mensaje": format!("Sale {id} has been updated"),
        "sale": sale,
    })))
}

/// DELETE /sales/{id} - remove a sale (guarded)
pub async fn delete(State(state): State<AppState>, Path(id): Path<i64>) -> ApiResult<Value> {
    validate_sale_id(id)?;

    let removed = sales::delete(&state.pool, id).await.map_err(db_error)?;
    if !removed {
        return Err(AppError::not_found(format!(
            "Sale {id} does not exist, cannot be deleted"
        )));
    }

    Ok(Json(
        json!({ "mensaje": format!("Sale {id} has been deleted") }),
    ))
}
