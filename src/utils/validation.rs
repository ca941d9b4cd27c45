//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos.

use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

use crate::utils::errors::AppError;

lazy_static! {
    /// Hora de inicio en formato HH:MM (24h)
    pub static ref START_TIME_RE: Regex = Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").unwrap();
}

/// Validar y convertir string a fecha
pub fn validate_date(value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        let mut error = ValidationError::new("date");
        error.add_param("value".into(), &value.to_string());
        error.add_param("format".into(), &"YYYY-MM-DD".to_string());
        error
    })
}

/// Igual que `validate_date` pero devolviendo un error de la API
pub fn parse_date_param(value: &str) -> Result<NaiveDate, AppError> {
    validate_date(value)
        .map_err(|_| AppError::BadRequest(format!("Invalid date '{}', expected YYYY-MM-DD", value)))
}

/// Validar que un string no esté vacío
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut error = ValidationError::new("not_blank");
        error.add_param("value".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_date() {
        assert!(validate_date("2024-01-15").is_ok());
        assert!(validate_date("2024/01/15").is_err());
        assert!(parse_date_param("15.01.2024").is_err());
    }

    #[test]
    fn test_start_time_regex() {
        assert!(START_TIME_RE.is_match("00:00"));
        assert!(START_TIME_RE.is_match("08:30"));
        assert!(START_TIME_RE.is_match("23:59"));
        assert!(!START_TIME_RE.is_match("24:00"));
        assert!(!START_TIME_RE.is_match("8:00"));
        assert!(!START_TIME_RE.is_match("08:60"));
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("Halle 3").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }
}
