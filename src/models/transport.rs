//! Modelo de Transport
//!
//! Transporte de un único tramo. `travel_minutes` es `None` cuando no hay
//! distancia registrada para el par de ubicaciones; es un estado válido.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Estado inicial de transportes y multitransportes
pub const DEFAULT_STATUS: &str = "open";

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Transport {
    pub id: i32,
    pub from_location: String,
    pub to_location: String,
    pub vehicle_type: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub travel_minutes: Option<f64>,
    pub time_window: NaiveDateTime,
    pub status: String,
    pub justification: Option<String>,
    pub driver_id: Option<i32>,
    pub multi_transport_id: Option<i32>,
}

/// Fila lista para insertar: la request con los minutos ya resueltos
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransport {
    pub from_location: String,
    pub to_location: String,
    pub vehicle_type: String,
    pub date: NaiveDate,
    pub start_time: String,
    /// `None` si el par de ubicaciones no está en la matriz
    pub travel_minutes: Option<f64>,
    pub time_window: NaiveDateTime,
    pub status: String,
    pub justification: Option<String>,
    pub driver_id: Option<i32>,
    pub multi_transport_id: Option<i32>,
}
