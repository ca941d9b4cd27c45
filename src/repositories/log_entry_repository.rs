use sqlx::PgPool;

use crate::dto::record_dto::LogEntryRequest;
use crate::models::LogEntry;
use crate::utils::errors::AppError;

pub struct LogEntryRepository {
    pool: PgPool,
}

impl LogEntryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &LogEntryRequest) -> Result<LogEntry, AppError> {
        let entry = sqlx::query_as::<_, LogEntry>(
            "INSERT INTO logbook (action, occurred_at, user_id) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&request.action)
        .bind(request.occurred_at)
        .bind(request.user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(entry)
    }

    pub async fn find_all(&self) -> Result<Vec<LogEntry>, AppError> {
        let entries = sqlx::query_as::<_, LogEntry>("SELECT * FROM logbook ORDER BY occurred_at DESC, id DESC")
            .fetch_all(&self.pool)
            .await?;
        Ok(entries)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM logbook WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
