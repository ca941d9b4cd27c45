use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::transport_controller::TransportController;
use crate::dto::transport_dto::TransportRequest;
use crate::dto::ApiResponse;
use crate::models::Transport;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_transport_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_transports).post(create_transport))
        .route("/:id", get(get_transport).put(update_transport).delete(delete_transport))
}

async fn create_transport(
    State(state): State<AppState>,
    Json(request): Json<TransportRequest>,
) -> Result<Json<Transport>, AppError> {
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_transports(State(state): State<AppState>) -> Result<Json<Vec<Transport>>, AppError> {
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_transport(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Transport>, AppError> {
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn update_transport(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<TransportRequest>,
) -> Result<Json<Transport>, AppError> {
    let controller = TransportController::new(state.pool.clone());
    Ok(Json(controller.update(id, request).await?))
}

async fn delete_transport(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse>, AppError> {
    let controller = TransportController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message(format!("Transport {} deleted", id))))
}
