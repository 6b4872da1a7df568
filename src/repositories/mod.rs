//! Repositorios de acceso a datos
//!
//! Un repositorio por agregado, sobre el pool de PostgreSQL.

pub mod airplane_repository;
pub mod airplane_type_repository;
pub mod airport_repository;
pub mod crew_repository;
pub mod flight_repository;
pub mod order_repository;
pub mod route_repository;
pub mod user_repository;
