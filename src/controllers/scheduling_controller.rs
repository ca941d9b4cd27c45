use sqlx::PgPool;
use validator::Validate;

use crate::dto::transport_dto::{AvailableSlotsResponse, RouteResolveRequest};
use crate::repositories::{BookingRepository, DistanceRepository};
use crate::services::route_resolver::{resolve_route, RouteResolution};
use crate::services::slot_availability::available_slots;
use crate::utils::errors::AppError;
use crate::utils::validation::parse_date_param;

/// Consultas de planificación: franjas libres y previsualización de rutas
pub struct SchedulingController {
    bookings: BookingRepository,
    distances: DistanceRepository,
}

impl SchedulingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool.clone()),
            distances: DistanceRepository::new(pool),
        }
    }

    pub async fn available_slots(&self, vehicle_type: String, date: &str) -> Result<AvailableSlotsResponse, AppError> {
        let date = parse_date_param(date)?;
        let slots = available_slots(&self.bookings, &vehicle_type, date).await?;
        Ok(AvailableSlotsResponse {
            vehicle_type,
            date,
            available_slots: slots,
        })
    }

    /// Resuelve los tramos sin guardar nada
    pub async fn preview_route(&self, request: RouteResolveRequest) -> Result<RouteResolution, AppError> {
        request.validate()?;
        let legs: Vec<(&str, &str)> = request
            .legs
            .iter()
            .map(|leg| (leg.from_location.as_str(), leg.to_location.as_str()))
            .collect();
        resolve_route(&self.distances, &legs).await
    }
}
