//! Backend de planificación logística
//!
//! Tipos de vehículo, transportes simples y de varios tramos, turnos,
//! ventanas horarias, matriz de distancias y libro de registro sobre
//! PostgreSQL, con el motor de tiempos de ruta y franjas libres en
//! [`services`].

pub mod config;
pub mod controllers;
pub mod database;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;
