use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use validator::Validate;

use crate::dto::record_dto::LogEntryRequest;
use crate::dto::ApiResponse;
use crate::models::LogEntry;
use crate::repositories::LogEntryRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_logbook_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_log_entries).post(create_log_entry))
        .route("/:id", delete(delete_log_entry))
}

async fn create_log_entry(
    State(state): State<AppState>,
    Json(request): Json<LogEntryRequest>,
) -> Result<Json<LogEntry>, AppError> {
    request.validate()?;
    let repository = LogEntryRepository::new(state.pool.clone());
    Ok(Json(repository.create(&request).await?))
}

async fn list_log_entries(State(state): State<AppState>) -> Result<Json<Vec<LogEntry>>, AppError> {
    let repository = LogEntryRepository::new(state.pool.clone());
    Ok(Json(repository.find_all().await?))
}

async fn delete_log_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse>, AppError> {
    let repository = LogEntryRepository::new(state.pool.clone());
    if !repository.delete(id).await? {
        return Err(not_found_error("LogEntry", id));
    }
    Ok(Json(ApiResponse::message(format!("LogEntry {} deleted", id))))
}
