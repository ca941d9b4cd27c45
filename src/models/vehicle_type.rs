//! Modelo de VehicleType
//!
//! Categoría de vehículo con el número de unidades disponibles. El nombre
//! es único y es la clave con la que transportes y franjas se refieren al
//! tipo.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct VehicleType {
    pub id: i32,
    pub name: String,
    pub available_count: i32,
}

/// Tipos de vehículo cargados con `SEED_VEHICLE_TYPES=true`
pub const DEFAULT_VEHICLE_TYPES: [(&str, i32); 4] = [
    ("Traileryard", 8),
    ("Jumbo", 12),
    ("Bonsai", 5),
    ("Touren LKW PCC", 6),
];
