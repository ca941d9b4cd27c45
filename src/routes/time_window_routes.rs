use axum::{
    extract::{Path, State},
    routing::{get, put},
    Json, Router,
};
use validator::Validate;

use crate::dto::record_dto::TimeWindowRequest;
use crate::dto::ApiResponse;
use crate::models::TimeWindow;
use crate::repositories::TimeWindowRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_time_window_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_time_windows).post(create_time_window))
        .route("/:id", put(update_time_window).delete(delete_time_window))
}

async fn create_time_window(
    State(state): State<AppState>,
    Json(request): Json<TimeWindowRequest>,
) -> Result<Json<TimeWindow>, AppError> {
    request.validate()?;
    let repository = TimeWindowRepository::new(state.pool.clone());
    Ok(Json(repository.create(&request).await?))
}

async fn list_time_windows(State(state): State<AppState>) -> Result<Json<Vec<TimeWindow>>, AppError> {
    let repository = TimeWindowRepository::new(state.pool.clone());
    Ok(Json(repository.find_all().await?))
}

async fn update_time_window(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<TimeWindowRequest>,
) -> Result<Json<TimeWindow>, AppError> {
    request.validate()?;
    let repository = TimeWindowRepository::new(state.pool.clone());
    let window = repository
        .update(id, &request)
        .await?
        .ok_or_else(|| not_found_error("TimeWindow", id))?;
    Ok(Json(window))
}

async fn delete_time_window(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse>, AppError> {
    let repository = TimeWindowRepository::new(state.pool.clone());
    if !repository.delete(id).await? {
        return Err(not_found_error("TimeWindow", id));
    }
    Ok(Json(ApiResponse::message(format!("TimeWindow {} deleted", id))))
}
