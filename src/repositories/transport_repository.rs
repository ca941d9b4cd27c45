use sqlx::PgPool;

use crate::dto::transport_dto::TransportRequest;
use crate::models::{NewTransport, Transport};
use crate::utils::errors::AppError;

pub struct TransportRepository {
    pool: PgPool,
}

impl TransportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: &NewTransport) -> Result<Transport, AppError> {
        let transport = sqlx::query_as::<_, Transport>(
            r#"
            INSERT INTO transports (from_location, to_location, vehicle_type, date, start_time, travel_minutes,
                                    time_window, status, justification, driver_id, multi_transport_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&new.from_location)
        .bind(&new.to_location)
        .bind(&new.vehicle_type)
        .bind(new.date)
        .bind(&new.start_time)
        .bind(new.travel_minutes)
        .bind(new.time_window)
        .bind(&new.status)
        .bind(&new.justification)
        .bind(new.driver_id)
        .bind(new.multi_transport_id)
        .fetch_one(&self.pool)
        .await?;

        log::info!("🚚 Transporte {} creado: {} -> {}", transport.id, transport.from_location, transport.to_location);
        Ok(transport)
    }

    pub async fn find_all(&self) -> Result<Vec<Transport>, AppError> {
        let transports = sqlx::query_as::<_, Transport>("SELECT * FROM transports ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(transports)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Transport>, AppError> {
        let transport = sqlx::query_as::<_, Transport>("SELECT * FROM transports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(transport)
    }

    /// Reemplaza los campos editables; `travel_minutes` conserva su valor
    pub async fn update(&self, id: i32, request: &TransportRequest) -> Result<Option<Transport>, AppError> {
        let transport = sqlx::query_as::<_, Transport>(
            r#"
            UPDATE transports
            SET from_location = $2, to_location = $3, vehicle_type = $4, date = $5, start_time = $6,
                time_window = $7, status = $8, justification = $9, driver_id = $10, multi_transport_id = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&request.from_location)
        .bind(&request.to_location)
        .bind(&request.vehicle_type)
        .bind(request.date)
        .bind(&request.start_time)
        .bind(request.time_window)
        .bind(&request.status)
        .bind(&request.justification)
        .bind(request.driver_id)
        .bind(request.multi_transport_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(transport)
    }

    /// `true` si existía la fila
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM transports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
