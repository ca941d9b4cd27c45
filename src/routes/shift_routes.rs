use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use validator::Validate;

use crate::dto::record_dto::ShiftRequest;
use crate::dto::ApiResponse;
use crate::models::Shift;
use crate::repositories::ShiftRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_shift_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_shifts).post(create_shift))
        .route("/:id", put(update_shift).delete(delete_shift))
}

async fn create_shift(
    State(state): State<AppState>,
    Json(request): Json<ShiftRequest>,
) -> Result<Json<Shift>, AppError> {
    request.validate()?;
    let repository = ShiftRepository::new(state.pool.clone());
    Ok(Json(repository.create(&request).await?))
}

async fn list_shifts(State(state): State<AppState>) -> Result<Json<Vec<Shift>>, AppError> {
    let repository = ShiftRepository::new(state.pool.clone());
    Ok(Json(repository.find_all().await?))
}

async fn update_shift(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<ShiftRequest>,
) -> Result<Json<Shift>, AppError> {
    request.validate()?;
    let repository = ShiftRepository::new(state.pool.clone());
    let shift = repository
        .update(id, &request)
        .await?
        .ok_or_else(|| not_found_error("Shift", id))?;
    Ok(Json(shift))
}

async fn delete_shift(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse>, AppError> {
    let repository = ShiftRepository::new(state.pool.clone());
    if !repository.delete(id).await? {
        return Err(not_found_error("Shift", id));
    }
    Ok(Json(ApiResponse::message(format!("Shift {} deleted", id))))
}
