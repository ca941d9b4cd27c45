//! Almacén en memoria
//!
//! Implementa [`DistanceStore`] y [`BookingStore`] sobre estructuras en
//! memoria. Útil para tests y para ejecutar el motor sin PostgreSQL.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::NaiveDate;
use tokio::sync::RwLock;

use super::distance_table::DistanceStore;
use super::slot_availability::BookingStore;
use crate::utils::errors::AppResult;

#[derive(Debug, Clone)]
struct DistanceRow {
    from: String,
    to: String,
    minutes: f64,
}

type Bookings = RwLock<HashMap<(String, NaiveDate), Vec<String>>>;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    distances: RwLock<Vec<DistanceRow>>,
    transports: Bookings,
    multi_transports: Bookings,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserción directa, sin comprobar duplicados
    pub async fn insert_distance(&self, from: &str, to: &str, minutes: f64) {
        self.distances.write().await.push(DistanceRow {
            from: from.to_string(),
            to: to.to_string(),
            minutes,
        });
    }

    /// Registra la hora de inicio de un transporte simple
    pub async fn book_transport(&self, vehicle_type: &str, date: NaiveDate, start_time: &str) {
        book(&self.transports, vehicle_type, date, start_time).await;
    }

    /// Registra la hora de inicio de un multitransporte
    pub async fn book_multi_transport(&self, vehicle_type: &str, date: NaiveDate, start_time: &str) {
        book(&self.multi_transports, vehicle_type, date, start_time).await;
    }

    pub async fn distance_row_count(&self, from: &str, to: &str) -> usize {
        self.distances
            .read()
            .await
            .iter()
            .filter(|row| row.from == from && row.to == to)
            .count()
    }
}

#[async_trait]
impl DistanceStore for InMemoryStore {
    async fn find_minutes(&self, from: &str, to: &str) -> AppResult<Option<f64>> {
        Ok(self
            .distances
            .read()
            .await
            .iter()
            .find(|row| row.from == from && row.to == to)
            .map(|row| row.minutes))
    }

    async fn insert_if_absent(&self, from: &str, to: &str, minutes: f64) -> AppResult<bool> {
        // un único write lock: comprobar e insertar es atómico
        let mut rows = self.distances.write().await;
        if rows.iter().any(|row| row.from == from && row.to == to) {
            return Ok(false);
        }
        rows.push(DistanceRow {
            from: from.to_string(),
            to: to.to_string(),
            minutes,
        });
        Ok(true)
    }
}

async fn book(bookings: &Bookings, vehicle_type: &str, date: NaiveDate, start_time: &str) {
    bookings
        .write()
        .await
        .entry((vehicle_type.to_string(), date))
        .or_default()
        .push(start_time.to_string());
}

async fn start_times(bookings: &Bookings, vehicle_type: &str, date: NaiveDate) -> Vec<String> {
    bookings
        .read()
        .await
        .get(&(vehicle_type.to_string(), date))
        .cloned()
        .unwrap_or_default()
}

#[async_trait]
impl BookingStore for InMemoryStore {
    async fn transport_start_times(&self, vehicle_type: &str, date: NaiveDate) -> AppResult<Vec<String>> {
        Ok(start_times(&self.transports, vehicle_type, date).await)
    }

    async fn multi_transport_start_times(&self, vehicle_type: &str, date: NaiveDate) -> AppResult<Vec<String>> {
        Ok(start_times(&self.multi_transports, vehicle_type, date).await)
    }
}
