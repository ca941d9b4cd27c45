//! Repositorios PostgreSQL
//!
//! Un repositorio por tabla. `DistanceRepository` y `BookingRepository`
//! implementan además los traits de almacenamiento del motor de rutas.

pub mod archived_transport_repository;
pub mod booking_repository;
pub mod distance_repository;
pub mod log_entry_repository;
pub mod multi_transport_repository;
pub mod shift_repository;
pub mod time_window_repository;
pub mod transport_repository;
pub mod user_repository;
pub mod vehicle_type_repository;

pub use archived_transport_repository::ArchivedTransportRepository;
pub use booking_repository::BookingRepository;
pub use distance_repository::DistanceRepository;
pub use log_entry_repository::LogEntryRepository;
pub use multi_transport_repository::MultiTransportRepository;
pub use shift_repository::ShiftRepository;
pub use time_window_repository::TimeWindowRepository;
pub use transport_repository::TransportRepository;
pub use user_repository::UserRepository;
pub use vehicle_type_repository::VehicleTypeRepository;
