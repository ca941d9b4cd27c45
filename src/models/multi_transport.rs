//! Modelo de MultiTransport
//!
//! Ruta con nombre compuesta por tramos ordenados que comparten tipo de
//! vehículo, fecha y hora de inicio.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MultiTransport {
    pub id: i32,
    pub name: String,
    pub vehicle_type: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub status: String,
    /// Suma de los tramos; los tramos sin distancia cuentan 0
    pub total_minutes: f64,
    pub driver_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Tramo de un multitransporte. `sequence` lo fija el cliente y no se
/// valida (puede tener huecos o repetirse).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MultiTransportLeg {
    pub id: i32,
    pub multi_transport_id: i32,
    pub sequence: i32,
    pub from_location: String,
    pub to_location: String,
    pub minutes: f64,
}

/// Cabecera y tramos listos para insertar en una transacción
#[derive(Debug, Clone, PartialEq)]
pub struct NewMultiTransport {
    pub name: String,
    pub vehicle_type: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub status: String,
    pub total_minutes: f64,
    pub driver_id: Option<i32>,
    pub legs: Vec<NewLeg>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewLeg {
    pub sequence: i32,
    pub from_location: String,
    pub to_location: String,
    /// 0 si el tramo no está en la matriz
    pub minutes: f64,
}
