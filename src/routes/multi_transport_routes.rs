use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};

use crate::controllers::multi_transport_controller::MultiTransportController;
use crate::dto::transport_dto::{MultiTransportRequest, MultiTransportResponse};
use crate::dto::ApiResponse;
use crate::models::MultiTransport;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_multi_transport_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_multi_transports).post(create_multi_transport))
        .route("/:id", get(get_multi_transport).delete(delete_multi_transport))
}

async fn create_multi_transport(
    State(state): State<AppState>,
    Json(request): Json<MultiTransportRequest>,
) -> Result<Json<MultiTransportResponse>, AppError> {
    let controller = MultiTransportController::new(state.pool.clone());
    Ok(Json(controller.create(request).await?))
}

async fn list_multi_transports(State(state): State<AppState>) -> Result<Json<Vec<MultiTransport>>, AppError> {
    let controller = MultiTransportController::new(state.pool.clone());
    Ok(Json(controller.list().await?))
}

async fn get_multi_transport(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<MultiTransportResponse>, AppError> {
    let controller = MultiTransportController::new(state.pool.clone());
    Ok(Json(controller.get_by_id(id).await?))
}

async fn delete_multi_transport(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<ApiResponse>, AppError> {
    let controller = MultiTransportController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(ApiResponse::message(format!("MultiTransport {} deleted", id))))
}
