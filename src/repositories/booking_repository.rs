use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::PgPool;

use crate::services::slot_availability::BookingStore;
use crate::utils::errors::AppResult;

/// Horas de inicio reservadas en `transports` y `multi_transports`
pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn start_times(&self, sql: &str, vehicle_type: &str, date: NaiveDate) -> AppResult<Vec<String>> {
        let rows: Vec<(String,)> = sqlx::query_as(sql)
            .bind(vehicle_type)
            .bind(date)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(|(start_time,)| start_time).collect())
    }
}

#[async_trait]
impl BookingStore for BookingRepository {
    async fn transport_start_times(&self, vehicle_type: &str, date: NaiveDate) -> AppResult<Vec<String>> {
        self.start_times(
            "SELECT start_time FROM transports WHERE vehicle_type = $1 AND date = $2",
            vehicle_type,
            date,
        )
        .await
    }

    async fn multi_transport_start_times(&self, vehicle_type: &str, date: NaiveDate) -> AppResult<Vec<String>> {
        self.start_times(
            "SELECT start_time FROM multi_transports WHERE vehicle_type = $1 AND date = $2",
            vehicle_type,
            date,
        )
        .await
    }
}
