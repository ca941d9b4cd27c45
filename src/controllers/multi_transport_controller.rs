use sqlx::PgPool;
use validator::Validate;

use crate::dto::transport_dto::{MultiTransportRequest, MultiTransportResponse};
use crate::models::transport::DEFAULT_STATUS;
use crate::models::{MultiTransport, NewLeg, NewMultiTransport};
use crate::repositories::{DistanceRepository, MultiTransportRepository};
use crate::services::distance_table::DistanceStore;
use crate::services::route_resolver::resolve_route;
use crate::utils::errors::{bad_request_error, not_found_error, AppError, AppResult};

pub struct MultiTransportController {
    repository: MultiTransportRepository,
    distances: DistanceRepository,
}

impl MultiTransportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: MultiTransportRepository::new(pool.clone()),
            distances: DistanceRepository::new(pool),
        }
    }

    pub async fn create(&self, request: MultiTransportRequest) -> Result<MultiTransportResponse, AppError> {
        request.validate()?;
        let new = plan_multi_transport(&self.distances, request).await?;
        let (header, legs) = self.repository.create_with_legs(&new).await?;
        Ok(MultiTransportResponse::new(header, legs))
    }

    pub async fn list(&self) -> Result<Vec<MultiTransport>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<MultiTransportResponse, AppError> {
        let header = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("MultiTransport", id))?;
        let legs = self.repository.legs_for(id).await?;
        Ok(MultiTransportResponse::new(header, legs))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("MultiTransport", id));
        }
        tracing::info!("🗑️ Multitransporte {} eliminado", id);
        Ok(())
    }
}

/// Cabecera y tramos a guardar. Los tramos sin distancia quedan con 0
/// minutos y el total es la suma de todos los tramos.
pub async fn plan_multi_transport<S>(distances: &S, request: MultiTransportRequest) -> AppResult<NewMultiTransport>
where
    S: DistanceStore + ?Sized,
{
    if request.legs.is_empty() {
        return Err(bad_request_error("A multi-transport needs at least one leg"));
    }

    let pairs: Vec<(&str, &str)> = request
        .legs
        .iter()
        .map(|leg| (leg.from_location.as_str(), leg.to_location.as_str()))
        .collect();
    let resolution = resolve_route(distances, &pairs).await?;

    let legs = request
        .legs
        .into_iter()
        .zip(resolution.per_leg)
        .map(|(leg, minutes)| NewLeg {
            sequence: leg.sequence,
            from_location: leg.from_location,
            to_location: leg.to_location,
            minutes: minutes.unwrap_or(0.0),
        })
        .collect();

    Ok(NewMultiTransport {
        name: request.name,
        vehicle_type: request.vehicle_type,
        date: request.date,
        start_time: request.start_time,
        status: DEFAULT_STATUS.to_string(),
        total_minutes: resolution.total_minutes,
        driver_id: request.driver_id,
        legs,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory_store::InMemoryStore;
    use serde_json::json;

    fn request(legs: serde_json::Value) -> MultiTransportRequest {
        serde_json::from_value(json!({
            "name": "Route A-B-C",
            "vehicle_type": "Jumbo",
            "date": "2024-01-01",
            "start_time": "09:00",
            "legs": legs
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_unresolved_leg_stored_as_zero() {
        let store = InMemoryStore::new();
        store.insert_distance("A", "B", 5.0).await;

        let new = plan_multi_transport(
            &store,
            request(json!([
                { "from_location": "A", "to_location": "B", "sequence": 1 },
                { "from_location": "B", "to_location": "C", "sequence": 2 }
            ])),
        )
        .await
        .unwrap();

        let minutes: Vec<f64> = new.legs.iter().map(|leg| leg.minutes).collect();
        assert_eq!(minutes, vec![5.0, 0.0]);
        assert_eq!(new.total_minutes, 5.0);
        assert_eq!(new.status, "open");
    }

    #[tokio::test]
    async fn test_total_sums_resolved_legs_in_both_directions() {
        let store = InMemoryStore::new();
        store.insert_distance("A", "B", 5.0).await;
        store.insert_distance("C", "B", 3.5).await;

        let new = plan_multi_transport(
            &store,
            request(json!([
                { "from_location": "A", "to_location": "B", "sequence": 1 },
                { "from_location": "B", "to_location": "C", "sequence": 2 }
            ])),
        )
        .await
        .unwrap();

        assert_eq!(new.total_minutes, 8.5);
        assert_eq!(new.legs[1].minutes, 3.5);
        assert_eq!(new.legs[1].sequence, 2);
    }

    #[tokio::test]
    async fn test_empty_route_is_rejected() {
        let store = InMemoryStore::new();
        let err = plan_multi_transport(&store, request(json!([]))).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
