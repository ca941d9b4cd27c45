//! Conversión de distancias en metros a minutos de trayecto
//!
//! Se usa al ingerir la matriz de distancias, nunca en el camino de una
//! petición de transporte. Los valores por defecto modelan tráfico lento
//! dentro de las instalaciones con un tiempo fijo de carga/maniobra y un
//! mínimo para trayectos muy cortos.

use serde::{Deserialize, Serialize};

/// Parámetros de la fórmula metros → minutos
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConversionParams {
    pub speed_kmh: f64,
    pub overhead_min: f64,
    pub min_minutes: f64,
}

impl Default for ConversionParams {
    fn default() -> Self {
        Self {
            speed_kmh: 10.0,
            overhead_min: 5.0,
            min_minutes: 8.0,
        }
    }
}

/// `meters_to_minutes_with` con los parámetros por defecto (10 km/h, 5 min, mínimo 8)
pub fn meters_to_minutes(meters: f64) -> f64 {
    meters_to_minutes_with(meters, &ConversionParams::default())
}

/// `(m / 1000 / km/h) * 60 + overhead`, con suelo en `min_minutes`,
/// redondeado a un decimal
pub fn meters_to_minutes_with(meters: f64, params: &ConversionParams) -> f64 {
    let raw = (meters / 1000.0 / params.speed_kmh) * 60.0 + params.overhead_min;
    round_one_decimal(raw.max(params.min_minutes))
}

/// Redondeo decimal sobre el valor binario exacto:
/// 8.45 se guarda como 8.4499… y queda en 8.4
fn round_one_decimal(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_kilometer() {
        assert_eq!(meters_to_minutes(1000.0), 11.0);
    }

    #[test]
    fn test_short_hops_clamp_to_minimum() {
        assert_eq!(meters_to_minutes(10.0), 8.0);
        assert_eq!(meters_to_minutes(0.0), 8.0);
        // 5 + 2.4 = 7.4 sigue por debajo del mínimo
        assert_eq!(meters_to_minutes(400.0), 8.0);
    }

    #[test]
    fn test_rounding_to_one_decimal() {
        // 1234 m -> 7.404 + 5 = 12.404
        assert_eq!(meters_to_minutes(1234.0), 12.4);
        // 1255 m -> 7.53 + 5 = 12.53
        assert_eq!(meters_to_minutes(1255.0), 12.5);
    }

    #[test]
    fn test_near_ties_round_on_binary_value() {
        // 575 m -> 3.45 + 5 = 8.45, que en binario es 8.4499…
        assert_eq!(meters_to_minutes(575.0), 8.4);
        assert_eq!(meters_to_minutes(1075.0), 11.4);
    }

    #[test]
    fn test_custom_params() {
        let params = ConversionParams {
            speed_kmh: 30.0,
            overhead_min: 0.0,
            min_minutes: 0.0,
        };
        // 3 km a 30 km/h = 6 min
        assert_eq!(meters_to_minutes_with(3000.0, &params), 6.0);
    }
}
