//! Modelos de datos
//!
//! Filas de PostgreSQL mapeadas con `sqlx::FromRow`. Se serializan tal
//! cual en las respuestas de la API.

pub mod archived_transport;
pub mod distance;
pub mod log_entry;
pub mod multi_transport;
pub mod shift;
pub mod time_window;
pub mod transport;
pub mod user;
pub mod vehicle_type;

pub use archived_transport::ArchivedTransport;
pub use distance::DistanceEntry;
pub use log_entry::LogEntry;
pub use multi_transport::{MultiTransport, MultiTransportLeg, NewLeg, NewMultiTransport};
pub use shift::Shift;
pub use time_window::TimeWindow;
pub use transport::{NewTransport, Transport};
pub use user::User;
pub use vehicle_type::VehicleType;
