use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};

use crate::controllers::scheduling_controller::SchedulingController;
use crate::dto::transport_dto::{AvailableSlotsResponse, RouteResolveRequest};
use crate::services::route_resolver::RouteResolution;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_scheduling_router() -> Router<AppState> {
    Router::new()
        .route("/available-slots/:vehicle_type/:date", get(available_slots))
        .route("/routes/resolve", post(resolve_route))
}

async fn available_slots(
    State(state): State<AppState>,
    Path((vehicle_type, date)): Path<(String, String)>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    let controller = SchedulingController::new(state.pool.clone());
    Ok(Json(controller.available_slots(vehicle_type, &date).await?))
}

async fn resolve_route(
    State(state): State<AppState>,
    Json(request): Json<RouteResolveRequest>,
) -> Result<Json<RouteResolution>, AppError> {
    let controller = SchedulingController::new(state.pool.clone());
    Ok(Json(controller.preview_route(request).await?))
}
