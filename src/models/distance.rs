//! Modelo de DistanceEntry

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Fila de la matriz de distancias, una por par ordenado
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DistanceEntry {
    pub id: i32,
    pub from_location: String,
    pub to_location: String,
    pub minutes: f64,
}
