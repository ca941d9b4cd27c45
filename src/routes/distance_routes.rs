use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};

use crate::controllers::distance_controller::DistanceController;
use crate::dto::distance_dto::{
    DistanceIngestRequest, DistanceIngestResponse, DistanceLookupQuery, DistanceLookupResponse,
    DistanceRequest,
};
use crate::dto::ApiResponse;
use crate::models::DistanceEntry;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_distance_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_distances).post(create_distance))
        .route("/lookup", get(lookup_distance))
        .route("/ingest", post(ingest_distances))
        .route("/:id", put(update_distance).delete(delete_distance))
}

fn controller(state: &AppState) -> DistanceController {
    DistanceController::new(state.pool.clone(), state.config.conversion)
}

async fn create_distance(
    State(state): State<AppState>,
    Json(request): Json<DistanceRequest>,
) -> Result<Json<DistanceEntry>, AppError> {
    Ok(Json(controller(&state).create(request).await?))
}

async fn list_distances(State(state): State<AppState>) -> Result<Json<Vec<DistanceEntry>>, AppError> {
    Ok(Json(controller(&state).list().await?))
}

async fn update_distance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<DistanceRequest>,
) -> Result<Json<DistanceEntry>, AppError> {
    Ok(Json(controller(&state).update(id, request).await?))
}

async fn delete_distance(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse>, AppError> {
    controller(&state).delete(id).await?;
    Ok(Json(ApiResponse::message(format!("Distance {} deleted", id))))
}

async fn lookup_distance(
    State(state): State<AppState>,
    Query(query): Query<DistanceLookupQuery>,
) -> Result<Json<DistanceLookupResponse>, AppError> {
    Ok(Json(controller(&state).lookup(query.from, query.to).await?))
}

async fn ingest_distances(
    State(state): State<AppState>,
    Json(request): Json<DistanceIngestRequest>,
) -> Result<Json<DistanceIngestResponse>, AppError> {
    Ok(Json(controller(&state).ingest(request).await?))
}
