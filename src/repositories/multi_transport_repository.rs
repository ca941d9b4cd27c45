use chrono::Utc;
use sqlx::PgPool;

use crate::models::{MultiTransport, MultiTransportLeg, NewMultiTransport};
use crate::utils::errors::AppError;

pub struct MultiTransportRepository {
    pool: PgPool,
}

impl MultiTransportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Guarda cabecera y tramos en una sola transacción
    pub async fn create_with_legs(
        &self,
        new: &NewMultiTransport,
    ) -> Result<(MultiTransport, Vec<MultiTransportLeg>), AppError> {
        let mut tx = self.pool.begin().await?;

        let header = sqlx::query_as::<_, MultiTransport>(
            r#"
            INSERT INTO multi_transports (name, vehicle_type, date, start_time, status, total_minutes, driver_id, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&new.name)
        .bind(&new.vehicle_type)
        .bind(new.date)
        .bind(&new.start_time)
        .bind(&new.status)
        .bind(new.total_minutes)
        .bind(new.driver_id)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await?;

        let mut legs = Vec::with_capacity(new.legs.len());
        for leg in &new.legs {
            let saved = sqlx::query_as::<_, MultiTransportLeg>(
                r#"
                INSERT INTO multi_transport_legs (multi_transport_id, sequence, from_location, to_location, minutes)
                VALUES ($1, $2, $3, $4, $5)
                RETURNING *
                "#,
            )
            .bind(header.id)
            .bind(leg.sequence)
            .bind(&leg.from_location)
            .bind(&leg.to_location)
            .bind(leg.minutes)
            .fetch_one(&mut *tx)
            .await?;
            legs.push(saved);
        }

        tx.commit().await?;

        log::info!(
            "🗺️ Multitransporte {} '{}' creado con {} tramos ({} min)",
            header.id,
            header.name,
            legs.len(),
            header.total_minutes
        );
        Ok((header, legs))
    }

    pub async fn find_all(&self) -> Result<Vec<MultiTransport>, AppError> {
        let headers = sqlx::query_as::<_, MultiTransport>("SELECT * FROM multi_transports ORDER BY id")
            .fetch_all(&self.pool)
            .await?;
        Ok(headers)
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<MultiTransport>, AppError> {
        let header = sqlx::query_as::<_, MultiTransport>("SELECT * FROM multi_transports WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(header)
    }

    pub async fn legs_for(&self, multi_transport_id: i32) -> Result<Vec<MultiTransportLeg>, AppError> {
        let legs = sqlx::query_as::<_, MultiTransportLeg>(
            "SELECT * FROM multi_transport_legs WHERE multi_transport_id = $1 ORDER BY sequence, id",
        )
        .bind(multi_transport_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(legs)
    }

    /// Los tramos se borran en cascada
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM multi_transports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
