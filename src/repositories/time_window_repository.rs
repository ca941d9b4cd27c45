use sqlx::PgPool;

use crate::dto::record_dto::TimeWindowRequest;
use crate::models::TimeWindow;
use crate::utils::errors::AppError;

pub struct TimeWindowRepository {
    pool: PgPool,
}

impl TimeWindowRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &TimeWindowRequest) -> Result<TimeWindow, AppError> {
        let window = sqlx::query_as::<_, TimeWindow>(
            "INSERT INTO time_windows (starts_at, ends_at, available) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(request.starts_at)
        .bind(request.ends_at)
        .bind(&request.available)
        .fetch_one(&self.pool)
        .await?;
        Ok(window)
    }

    pub async fn find_all(&self) -> Result<Vec<TimeWindow>, AppError> {
        let windows = sqlx::query_as::<_, TimeWindow>("SELECT * FROM time_windows ORDER BY starts_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(windows)
    }

    pub async fn update(&self, id: i32, request: &TimeWindowRequest) -> Result<Option<TimeWindow>, AppError> {
        let window = sqlx::query_as::<_, TimeWindow>(
            "UPDATE time_windows SET starts_at = $2, ends_at = $3, available = $4 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(request.starts_at)
        .bind(request.ends_at)
        .bind(&request.available)
        .fetch_optional(&self.pool)
        .await?;
        Ok(window)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM time_windows WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
