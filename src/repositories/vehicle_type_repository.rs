use sqlx::PgPool;

use crate::models::vehicle_type::DEFAULT_VEHICLE_TYPES;
use crate::models::VehicleType;
use crate::utils::errors::{conflict_error, AppError};

pub struct VehicleTypeRepository {
    pool: PgPool,
}

impl VehicleTypeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, name: &str, available_count: i32) -> Result<VehicleType, AppError> {
        sqlx::query_as::<_, VehicleType>(
            "INSERT INTO vehicle_types (name, available_count) VALUES ($1, $2) RETURNING *",
        )
        .bind(name)
        .bind(available_count)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_write(e, || conflict_error("Vehicle type", "name", name)))
    }

    pub async fn find_all(&self) -> Result<Vec<VehicleType>, AppError> {
        let types = sqlx::query_as::<_, VehicleType>("SELECT * FROM vehicle_types ORDER BY name")
            .fetch_all(&self.pool)
            .await?;
        Ok(types)
    }

    /// Inserta los tipos por defecto que falten. Devuelve cuántos se añadieron.
    pub async fn seed_defaults(&self) -> Result<usize, AppError> {
        let mut added = 0;
        for (name, available_count) in DEFAULT_VEHICLE_TYPES {
            let result = sqlx::query(
                "INSERT INTO vehicle_types (name, available_count) VALUES ($1, $2) ON CONFLICT (name) DO NOTHING",
            )
            .bind(name)
            .bind(available_count)
            .execute(&self.pool)
            .await?;

            if result.rows_affected() > 0 {
                log::info!("🚛 Tipo de vehículo añadido: {} (cantidad: {})", name, available_count);
                added += 1;
            } else {
                log::debug!("Tipo de vehículo ya existente: {}", name);
            }
        }
        Ok(added)
    }
}
