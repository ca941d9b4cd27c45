//! Controladores
//!
//! Orquestan repositorios y servicios para los endpoints con lógica
//! propia: transportes, multitransportes, distancias y planificación.

pub mod distance_controller;
pub mod multi_transport_controller;
pub mod scheduling_controller;
pub mod transport_controller;
