//! Modelo de ArchivedTransport
//!
//! Copia manual de un transporte terminado; la crea el cliente.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ArchivedTransport {
    pub id: i32,
    pub from_location: String,
    pub to_location: String,
    pub vehicle_type: String,
    pub status: String,
    pub completed_at: NaiveDateTime,
    pub justification: Option<String>,
}
