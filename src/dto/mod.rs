//! DTOs de la API
//!
//! Requests validados con `validator` y respuestas específicas de cada
//! endpoint.

pub mod api_response;
pub mod distance_dto;
pub mod record_dto;
pub mod transport_dto;

pub use api_response::ApiResponse;
