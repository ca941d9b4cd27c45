use sqlx::PgPool;

use crate::dto::record_dto::ShiftRequest;
use crate::models::Shift;
use crate::utils::errors::AppError;

pub struct ShiftRepository {
    pool: PgPool,
}

impl ShiftRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &ShiftRequest) -> Result<Shift, AppError> {
        let shift = sqlx::query_as::<_, Shift>(
            r#"
            INSERT INTO shifts (starts_at, ends_at, break_minutes, driver_id)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(request.starts_at)
        .bind(request.ends_at)
        .bind(request.break_minutes)
        .bind(request.driver_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(shift)
    }

    pub async fn find_all(&self) -> Result<Vec<Shift>, AppError> {
        let shifts = sqlx::query_as::<_, Shift>("SELECT * FROM shifts ORDER BY starts_at")
            .fetch_all(&self.pool)
            .await?;
        Ok(shifts)
    }

    pub async fn update(&self, id: i32, request: &ShiftRequest) -> Result<Option<Shift>, AppError> {
        let shift = sqlx::query_as::<_, Shift>(
            r#"
            UPDATE shifts SET starts_at = $2, ends_at = $3, break_minutes = $4, driver_id = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(request.starts_at)
        .bind(request.ends_at)
        .bind(request.break_minutes)
        .bind(request.driver_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(shift)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM shifts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
