use sqlx::PgPool;
use validator::Validate;

use crate::dto::transport_dto::TransportRequest;
use crate::models::{NewTransport, Transport};
use crate::repositories::{DistanceRepository, TransportRepository};
use crate::services::distance_table::DistanceStore;
use crate::services::route_resolver::resolve_leg;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct TransportController {
    repository: TransportRepository,
    distances: DistanceRepository,
}

impl TransportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: TransportRepository::new(pool.clone()),
            distances: DistanceRepository::new(pool),
        }
    }

    /// Crea el transporte con los minutos de trayecto resueltos en la
    /// matriz; sin distancia registrada se guarda `None`
    pub async fn create(&self, request: TransportRequest) -> Result<Transport, AppError> {
        request.validate()?;
        let new = plan_transport(&self.distances, request).await?;
        self.repository.create(&new).await
    }

    pub async fn list(&self) -> Result<Vec<Transport>, AppError> {
        self.repository.find_all().await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Transport, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Transport", id))
    }

    pub async fn update(&self, id: i32, request: TransportRequest) -> Result<Transport, AppError> {
        request.validate()?;
        self.repository
            .update(id, &request)
            .await?
            .ok_or_else(|| not_found_error("Transport", id))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Transport", id));
        }
        tracing::info!("🗑️ Transporte {} eliminado", id);
        Ok(())
    }
}

/// Fila a guardar para una request ya validada
pub async fn plan_transport<S>(distances: &S, request: TransportRequest) -> AppResult<NewTransport>
where
    S: DistanceStore + ?Sized,
{
    let travel_minutes = resolve_leg(distances, &request.from_location, &request.to_location).await?;
    if travel_minutes.is_none() {
        tracing::warn!(
            "⚠️ Sin distancia para {} -> {}, transporte sin minutos de trayecto",
            request.from_location,
            request.to_location
        );
    }

    Ok(NewTransport {
        from_location: request.from_location,
        to_location: request.to_location,
        vehicle_type: request.vehicle_type,
        date: request.date,
        start_time: request.start_time,
        travel_minutes,
        time_window: request.time_window,
        status: request.status,
        justification: request.justification,
        driver_id: request.driver_id,
        multi_transport_id: request.multi_transport_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::memory_store::InMemoryStore;
    use serde_json::json;

    fn request(from: &str, to: &str) -> TransportRequest {
        serde_json::from_value(json!({
            "from_location": from,
            "to_location": to,
            "vehicle_type": "Jumbo",
            "date": "2024-01-01",
            "start_time": "08:00",
            "time_window": "2024-01-01T08:00:00"
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_unknown_pair_is_stored_without_minutes() {
        let store = InMemoryStore::new();
        store.insert_distance("Halle 1", "Tor 4", 12.5).await;

        let new = plan_transport(&store, request("Halle 1", "Werk 9")).await.unwrap();

        assert_eq!(new.travel_minutes, None);
        assert_eq!(new.status, "open");
        assert_eq!(new.start_time, "08:00");
    }

    #[tokio::test]
    async fn test_reverse_pair_fills_minutes() {
        let store = InMemoryStore::new();
        store.insert_distance("Tor 4", "Halle 1", 12.5).await;

        let new = plan_transport(&store, request("Halle 1", "Tor 4")).await.unwrap();

        assert_eq!(new.travel_minutes, Some(12.5));
        assert_eq!(new.from_location, "Halle 1");
        assert_eq!(new.to_location, "Tor 4");
    }
}
