//! Disponibilidad de franjas horarias
//!
//! El día se divide en 48 franjas de 30 minutos etiquetadas `"HH:MM"`.
//! Una franja está ocupada si su etiqueta coincide exactamente con la hora
//! de inicio de un transporte o multitransporte del mismo tipo de vehículo
//! y fecha. Sólo se bloquea la franja de inicio, aunque el trayecto dure
//! más de 30 minutos.

use std::collections::HashSet;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::utils::errors::AppResult;

pub const SLOTS_PER_DAY: usize = 48;
pub const SLOT_MINUTES: usize = 30;

/// Fuente de reservas existentes, una consulta por tipo de reserva
#[async_trait]
pub trait BookingStore: Send + Sync {
    /// Horas de inicio de los transportes simples
    async fn transport_start_times(&self, vehicle_type: &str, date: NaiveDate) -> AppResult<Vec<String>>;

    /// Horas de inicio de los multitransportes
    async fn multi_transport_start_times(&self, vehicle_type: &str, date: NaiveDate) -> AppResult<Vec<String>>;
}

/// Las 48 etiquetas del día, de `"00:00"` a `"23:30"`
pub fn slot_grid() -> Vec<String> {
    (0..SLOTS_PER_DAY)
        .map(|i| {
            let minutes = i * SLOT_MINUTES;
            format!("{:02}:{:02}", minutes / 60, minutes % 60)
        })
        .collect()
}

/// Franjas de la rejilla cuya etiqueta no aparece en `booked`, en orden ascendente
pub fn free_slots<I, S>(booked: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let booked: HashSet<String> = booked.into_iter().map(|s| s.as_ref().to_string()).collect();
    slot_grid()
        .into_iter()
        .filter(|slot| !booked.contains(slot))
        .collect()
}

/// Franjas libres para un tipo de vehículo y fecha. Cuentan como
/// reservadas las horas de inicio de transportes y de multitransportes.
pub async fn available_slots<S>(store: &S, vehicle_type: &str, date: NaiveDate) -> AppResult<Vec<String>>
where
    S: BookingStore + ?Sized,
{
    let (single, multi) = futures::try_join!(
        store.transport_start_times(vehicle_type, date),
        store.multi_transport_start_times(vehicle_type, date)
    )?;
    let free = free_slots(single.iter().chain(multi.iter()));

    log::debug!(
        "🕒 {} {}: {} transportes, {} multitransportes, {} franjas libres",
        vehicle_type,
        date,
        single.len(),
        multi.len(),
        free.len()
    );

    Ok(free)
}
