use async_trait::async_trait;
use sqlx::PgPool;

use crate::models::DistanceEntry;
use crate::services::distance_table::DistanceStore;
use crate::utils::errors::{conflict_error, AppError, AppResult};

pub struct DistanceRepository {
    pool: PgPool,
}

impl DistanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, from: &str, to: &str, minutes: f64) -> Result<DistanceEntry, AppError> {
        sqlx::query_as::<_, DistanceEntry>(
            r#"
            INSERT INTO distance_matrix (from_location, to_location, minutes)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(from)
        .bind(to)
        .bind(minutes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, || conflict_error("Distance", "pair", &format!("{} -> {}", from, to))))
    }

    pub async fn find_all(&self) -> Result<Vec<DistanceEntry>, AppError> {
        let entries = sqlx::query_as::<_, DistanceEntry>(
            "SELECT * FROM distance_matrix ORDER BY from_location, to_location",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }

    pub async fn update(&self, id: i32, from: &str, to: &str, minutes: f64) -> Result<Option<DistanceEntry>, AppError> {
        sqlx::query_as::<_, DistanceEntry>(
            r#"
            UPDATE distance_matrix
            SET from_location = $2, to_location = $3, minutes = $4
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(from)
        .bind(to)
        .bind(minutes)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, || conflict_error("Distance", "pair", &format!("{} -> {}", from, to))))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM distance_matrix WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

#[async_trait]
impl DistanceStore for DistanceRepository {
    async fn find_minutes(&self, from: &str, to: &str) -> AppResult<Option<f64>> {
        let row: Option<(f64,)> = sqlx::query_as(
            "SELECT minutes FROM distance_matrix WHERE from_location = $1 AND to_location = $2 LIMIT 1",
        )
        .bind(from)
        .bind(to)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(|(minutes,)| minutes))
    }

    async fn insert_if_absent(&self, from: &str, to: &str, minutes: f64) -> AppResult<bool> {
        // el índice único (from_location, to_location) hace atómica la comprobación
        let result = sqlx::query(
            r#"
            INSERT INTO distance_matrix (from_location, to_location, minutes)
            VALUES ($1, $2, $3)
            ON CONFLICT (from_location, to_location) DO NOTHING
            "#,
        )
        .bind(from)
        .bind(to)
        .bind(minutes)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() == 1)
    }
}
