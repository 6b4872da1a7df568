//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL.

pub mod airplane;
pub mod airplane_type;
pub mod airport;
pub mod crew;
pub mod flight;
pub mod order;
pub mod route;
pub mod ticket;
pub mod user;
