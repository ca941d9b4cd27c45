//! Resolución de tiempos de ruta
//!
//! Asigna minutos a cada tramo de una ruta usando la tabla de distancias y
//! agrega el total. Un tramo sin distancia registrada queda en `None` y
//! suma 0 al total: una ruta con tramos sin resolver reporta de menos su
//! duración en vez de fallar.

use serde::Serialize;

use super::distance_table::{lookup_distance, DistanceStore};
use crate::utils::errors::AppResult;

/// Resultado de resolver una ruta de varios tramos
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResolution {
    /// Minutos por tramo, en el mismo orden que la entrada
    pub per_leg: Vec<Option<f64>>,
    pub total_minutes: f64,
}

impl RouteResolution {
    /// Número de tramos sin distancia registrada
    pub fn unresolved_legs(&self) -> usize {
        self.per_leg.iter().filter(|m| m.is_none()).count()
    }
}

/// Minutos de un único tramo
pub async fn resolve_leg<S>(store: &S, from: &str, to: &str) -> AppResult<Option<f64>>
where
    S: DistanceStore + ?Sized,
{
    lookup_distance(store, from, to).await
}

/// Resuelve cada tramo `(from, to)` de forma independiente
pub async fn resolve_route<S>(store: &S, legs: &[(&str, &str)]) -> AppResult<RouteResolution>
where
    S: DistanceStore + ?Sized,
{
    let mut per_leg = Vec::with_capacity(legs.len());
    for (from, to) in legs {
        per_leg.push(resolve_leg(store, from, to).await?);
    }

    let total_minutes: f64 = per_leg.iter().map(|m| m.unwrap_or(0.0)).sum();
    let resolution = RouteResolution { per_leg, total_minutes };

    if resolution.unresolved_legs() > 0 {
        log::warn!(
            "⚠️ Ruta con {} de {} tramos sin distancia; total parcial {} min",
            resolution.unresolved_legs(),
            legs.len(),
            resolution.total_minutes
        );
    }

    Ok(resolution)
}
