use axum::{extract::State, routing::get, Json, Router};
use validator::Validate;

use crate::dto::record_dto::VehicleTypeRequest;
use crate::models::VehicleType;
use crate::repositories::VehicleTypeRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_type_router() -> Router<AppState> {
    Router::new().route("/", get(list_vehicle_types).post(create_vehicle_type))
}

async fn create_vehicle_type(
    State(state): State<AppState>,
    Json(request): Json<VehicleTypeRequest>,
) -> Result<Json<VehicleType>, AppError> {
    request.validate()?;
    let repository = VehicleTypeRepository::new(state.pool.clone());
    let vehicle_type = repository
        .create(request.name.trim(), request.available_count)
        .await?;
    Ok(Json(vehicle_type))
}

async fn list_vehicle_types(State(state): State<AppState>) -> Result<Json<Vec<VehicleType>>, AppError> {
    let repository = VehicleTypeRepository::new(state.pool.clone());
    Ok(Json(repository.find_all().await?))
}
