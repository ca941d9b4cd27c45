//! Servicios de negocio
//!
//! Motor de tiempos de ruta y disponibilidad de franjas. Todas las
//! funciones reciben el almacén como parámetro explícito.

pub mod distance_table;
pub mod memory_store;
pub mod route_resolver;
pub mod slot_availability;
pub mod unit_conversion;

pub use distance_table::{insert_if_absent, lookup_distance, DistanceStore};
pub use memory_store::InMemoryStore;
pub use route_resolver::{resolve_leg, resolve_route, RouteResolution};
pub use slot_availability::{available_slots, free_slots, slot_grid, BookingStore};
pub use unit_conversion::{meters_to_minutes, meters_to_minutes_with, ConversionParams};
