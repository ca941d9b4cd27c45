use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::utils::validation::validate_not_blank;

// Request para crear o actualizar una distancia.
// Se indica `minutes` o `meters` (convertidos con los parámetros configurados).
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct DistanceRequest {
    #[validate(custom = "validate_not_blank")]
    pub from_location: String,

    #[validate(custom = "validate_not_blank")]
    pub to_location: String,

    #[validate(range(min = 0.0))]
    pub minutes: Option<f64>,

    #[validate(range(min = 0.0))]
    pub meters: Option<f64>,
}

// Query de consulta puntual
#[derive(Debug, Deserialize)]
pub struct DistanceLookupQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Serialize)]
pub struct DistanceLookupResponse {
    pub from: String,
    pub to: String,
    pub minutes: Option<f64>,
}

// Lote de entradas para la ingesta idempotente
#[derive(Debug, Deserialize, Validate)]
pub struct DistanceIngestRequest {
    #[validate]
    pub entries: Vec<DistanceRequest>,
}

#[derive(Debug, Default, Serialize)]
pub struct DistanceIngestResponse {
    pub inserted: usize,
    pub skipped_existing: usize,
    pub skipped_empty: usize,
}
