use serde::Serialize;

// Confirmación genérica para operaciones sin datos de vuelta (borrados)
#[derive(Debug, Serialize)]
pub struct ApiResponse {
    pub success: bool,
    pub message: String,
}

impl ApiResponse {
    pub fn message(message: String) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_shape() {
        let value = serde_json::to_value(ApiResponse::message("Shift 3 deleted".into())).unwrap();
        assert_eq!(value, serde_json::json!({ "success": true, "message": "Shift 3 deleted" }));
    }
}
