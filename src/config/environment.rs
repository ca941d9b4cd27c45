//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;
use std::str::FromStr;

use thiserror::Error;

use crate::services::unit_conversion::ConversionParams;

/// Orígenes permitidos por defecto (dashboard en los puertos 3000-3005)
const DEFAULT_CORS_PORTS: std::ops::RangeInclusive<u16> = 3000..=3005;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for {key}: '{value}'")]
    Invalid { key: &'static str, value: String },
}

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub log_level: String,
    pub cors_origins: Vec<String>,
    pub seed_vehicle_types: bool,
    /// Parámetros para convertir metros de la matriz en minutos de trayecto
    pub conversion: ConversionParams,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        let defaults = ConversionParams::default();
        Self {
            environment: "development".to_string(),
            port: 8000,
            host: "0.0.0.0".to_string(),
            log_level: "info".to_string(),
            cors_origins: default_cors_origins(),
            seed_vehicle_types: false,
            conversion: defaults,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración desde variables de entorno, con valores por defecto
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let cors_origins = match env::var("CORS_ORIGINS") {
            Ok(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            Err(_) => defaults.cors_origins,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port: parse_var("PORT", defaults.port)?,
            host: env::var("HOST").unwrap_or(defaults.host),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
            cors_origins,
            seed_vehicle_types: parse_var("SEED_VEHICLE_TYPES", defaults.seed_vehicle_types)?,
            conversion: ConversionParams {
                speed_kmh: positive("TRAVEL_SPEED_KMH", parse_var("TRAVEL_SPEED_KMH", defaults.conversion.speed_kmh)?)?,
                overhead_min: parse_var("TRAVEL_OVERHEAD_MIN", defaults.conversion.overhead_min)?,
                min_minutes: parse_var("TRAVEL_MIN_MINUTES", defaults.conversion.min_minutes)?,
            },
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Obtener la URL del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// `CORS_ORIGINS=*` abre CORS por completo, sólo en desarrollo
    pub fn allows_any_origin(&self) -> bool {
        self.is_development() && self.cors_origins.iter().any(|o| o == "*")
    }
}

fn default_cors_origins() -> Vec<String> {
    ["localhost", "127.0.0.1"]
        .iter()
        .flat_map(|host| DEFAULT_CORS_PORTS.map(move |port| format!("http://{}:{}", host, port)))
        .collect()
}

fn parse_var<T: FromStr>(key: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
        Err(_) => Ok(default),
    }
}

/// La velocidad divide en la conversión: debe ser > 0
fn positive(key: &'static str, value: f64) -> Result<f64, ConfigError> {
    if value > 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::Invalid {
            key,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_cors_origins() {
        let origins = default_cors_origins();
        assert_eq!(origins.len(), 12);
        assert!(origins.contains(&"http://localhost:3000".to_string()));
        assert!(origins.contains(&"http://127.0.0.1:3005".to_string()));
    }

    #[test]
    fn test_default_config() {
        let config = EnvironmentConfig::default();
        assert!(config.is_development());
        assert_eq!(config.server_url(), "0.0.0.0:8000");
        assert!(!config.allows_any_origin());
        assert_eq!(config.conversion, ConversionParams::default());
    }

    #[test]
    fn test_wildcard_cors_only_in_development() {
        let mut config = EnvironmentConfig {
            cors_origins: vec!["*".to_string()],
            ..EnvironmentConfig::default()
        };
        assert!(config.allows_any_origin());

        config.environment = "production".to_string();
        assert!(!config.allows_any_origin());
    }

    #[test]
    fn test_speed_must_be_positive() {
        assert_eq!(positive("TRAVEL_SPEED_KMH", 10.0).unwrap(), 10.0);
        assert!(matches!(
            positive("TRAVEL_SPEED_KMH", 0.0),
            Err(ConfigError::Invalid { key: "TRAVEL_SPEED_KMH", .. })
        ));
        assert!(positive("TRAVEL_SPEED_KMH", -5.0).is_err());
        assert!(positive("TRAVEL_SPEED_KMH", f64::NAN).is_err());
    }

    #[test]
    fn test_parse_var_rejects_garbage() {
        std::env::set_var("LOGISTIK_TEST_PORT", "abc");
        let result: Result<u16, _> = parse_var("LOGISTIK_TEST_PORT", 1);
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
        std::env::remove_var("LOGISTIK_TEST_PORT");

        let fallback: u16 = parse_var("LOGISTIK_TEST_UNSET", 7).unwrap();
        assert_eq!(fallback, 7);
    }
}
