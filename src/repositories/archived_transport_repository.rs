use sqlx::PgPool;

use crate::dto::record_dto::ArchivedTransportRequest;
use crate::models::ArchivedTransport;
use crate::utils::errors::AppError;

pub struct ArchivedTransportRepository {
    pool: PgPool,
}

impl ArchivedTransportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: &ArchivedTransportRequest) -> Result<ArchivedTransport, AppError> {
        let archived = sqlx::query_as::<_, ArchivedTransport>(
            r#"
            INSERT INTO archived_transports (from_location, to_location, vehicle_type, status, completed_at, justification)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(&request.from_location)
        .bind(&request.to_location)
        .bind(&request.vehicle_type)
        .bind(&request.status)
        .bind(request.completed_at)
        .bind(&request.justification)
        .fetch_one(&self.pool)
        .await?;
        Ok(archived)
    }

    pub async fn find_all(&self) -> Result<Vec<ArchivedTransport>, AppError> {
        let archived = sqlx::query_as::<_, ArchivedTransport>(
            "SELECT * FROM archived_transports ORDER BY completed_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(archived)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM archived_transports WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
