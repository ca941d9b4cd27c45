use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use validator::Validate;

use crate::dto::record_dto::ArchivedTransportRequest;
use crate::dto::ApiResponse;
use crate::models::ArchivedTransport;
use crate::repositories::ArchivedTransportRepository;
use crate::state::AppState;
use crate::utils::errors::{not_found_error, AppError};

pub fn create_archive_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_archived).post(archive_transport))
        .route("/:id", delete(delete_archived))
}

async fn archive_transport(
    State(state): State<AppState>,
    Json(request): Json<ArchivedTransportRequest>,
) -> Result<Json<ArchivedTransport>, AppError> {
    request.validate()?;
    let repository = ArchivedTransportRepository::new(state.pool.clone());
    Ok(Json(repository.create(&request).await?))
}

async fn list_archived(State(state): State<AppState>) -> Result<Json<Vec<ArchivedTransport>>, AppError> {
    let repository = ArchivedTransportRepository::new(state.pool.clone());
    Ok(Json(repository.find_all().await?))
}

async fn delete_archived(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse>, AppError> {
    let repository = ArchivedTransportRepository::new(state.pool.clone());
    if !repository.delete(id).await? {
        return Err(not_found_error("ArchivedTransport", id));
    }
    Ok(Json(ApiResponse::message(format!("ArchivedTransport {} deleted", id))))
}
