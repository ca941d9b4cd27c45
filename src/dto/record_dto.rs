//! Requests de los registros planos (usuarios, tipos de vehículo,
//! ventanas horarias, turnos, libro de registro y archivo)

use chrono::NaiveDateTime;
use serde::Deserialize;
use validator::Validate;

use crate::utils::validation::validate_not_blank;

#[derive(Debug, Deserialize, Validate)]
pub struct UserRequest {
    #[validate(custom = "validate_not_blank")]
    pub first_name: String,
    #[validate(custom = "validate_not_blank")]
    pub last_name: String,
    pub role: String,
    #[validate(email)]
    pub email: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct VehicleTypeRequest {
    #[validate(custom = "validate_not_blank")]
    pub name: String,
    #[validate(range(min = 0))]
    pub available_count: i32,
}

fn default_available() -> String {
    "true".to_string()
}

#[derive(Debug, Deserialize, Validate)]
pub struct TimeWindowRequest {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    #[serde(default = "default_available")]
    pub available: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ShiftRequest {
    pub starts_at: NaiveDateTime,
    pub ends_at: NaiveDateTime,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub break_minutes: i32,
    pub driver_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LogEntryRequest {
    #[validate(custom = "validate_not_blank")]
    pub action: String,
    pub occurred_at: NaiveDateTime,
    pub user_id: i32,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ArchivedTransportRequest {
    pub from_location: String,
    pub to_location: String,
    pub vehicle_type: String,
    pub status: String,
    pub completed_at: NaiveDateTime,
    pub justification: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shift_break_defaults_to_zero() {
        let shift: ShiftRequest = serde_json::from_value(json!({
            "starts_at": "2024-01-01T06:00:00",
            "ends_at": "2024-01-01T14:00:00",
            "driver_id": 3
        }))
        .unwrap();
        assert_eq!(shift.break_minutes, 0);
    }

    #[test]
    fn test_time_window_available_defaults_to_true() {
        let window: TimeWindowRequest = serde_json::from_value(json!({
            "starts_at": "2024-01-01T06:00:00",
            "ends_at": "2024-01-01T07:00:00"
        }))
        .unwrap();
        assert_eq!(window.available, "true");
    }

    #[test]
    fn test_vehicle_type_rejects_negative_count() {
        let request = VehicleTypeRequest {
            name: "Jumbo".into(),
            available_count: -1,
        };
        assert!(request.validate().is_err());
    }
}
