use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::transport::DEFAULT_STATUS;
use crate::models::{MultiTransport, MultiTransportLeg};
use crate::utils::validation::{validate_not_blank, START_TIME_RE};

fn default_status() -> String {
    DEFAULT_STATUS.to_string()
}

// Request para crear o reemplazar un transporte
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TransportRequest {
    #[validate(custom = "validate_not_blank")]
    pub from_location: String,

    #[validate(custom = "validate_not_blank")]
    pub to_location: String,

    #[validate(custom = "validate_not_blank")]
    pub vehicle_type: String,

    pub date: NaiveDate,

    #[validate(regex = "START_TIME_RE")]
    pub start_time: String,

    pub time_window: NaiveDateTime,

    #[serde(default = "default_status")]
    pub status: String,

    pub justification: Option<String>,
    pub driver_id: Option<i32>,
    pub multi_transport_id: Option<i32>,
}

// Tramo de un multitransporte
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LegRequest {
    #[validate(custom = "validate_not_blank")]
    pub from_location: String,

    #[validate(custom = "validate_not_blank")]
    pub to_location: String,

    pub sequence: i32,
}

// Request para crear un multitransporte
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MultiTransportRequest {
    #[validate(custom = "validate_not_blank")]
    pub name: String,

    #[validate(custom = "validate_not_blank")]
    pub vehicle_type: String,

    pub date: NaiveDate,

    #[validate(regex = "START_TIME_RE")]
    pub start_time: String,

    #[validate]
    pub legs: Vec<LegRequest>,

    pub driver_id: Option<i32>,
}

// Response de multitransporte con sus tramos
#[derive(Debug, Serialize)]
pub struct MultiTransportResponse {
    pub id: i32,
    pub name: String,
    pub vehicle_type: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub status: String,
    pub total_minutes: f64,
    pub driver_id: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub legs: Vec<MultiTransportLeg>,
}

impl MultiTransportResponse {
    pub fn new(header: MultiTransport, mut legs: Vec<MultiTransportLeg>) -> Self {
        legs.sort_by_key(|leg| (leg.sequence, leg.id));
        Self {
            id: header.id,
            name: header.name,
            vehicle_type: header.vehicle_type,
            date: header.date,
            start_time: header.start_time,
            status: header.status,
            total_minutes: header.total_minutes,
            driver_id: header.driver_id,
            created_at: header.created_at,
            legs,
        }
    }
}

// Request para previsualizar los tiempos de una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct RouteResolveRequest {
    #[validate]
    pub legs: Vec<RouteLeg>,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RouteLeg {
    #[validate(custom = "validate_not_blank")]
    pub from_location: String,

    #[validate(custom = "validate_not_blank")]
    pub to_location: String,
}

// Response de franjas libres
#[derive(Debug, Serialize)]
pub struct AvailableSlotsResponse {
    pub vehicle_type: String,
    pub date: NaiveDate,
    pub available_slots: Vec<String>,
}
