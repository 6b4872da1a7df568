//! Controladores de la API
//!
//! Lógica de negocio por recurso. Los handlers de rutas delegan aquí
//! después de aplicar la política de permisos.

pub mod airplane_controller;
pub mod airplane_type_controller;
pub mod airport_controller;
pub mod crew_controller;
pub mod flight_controller;
pub mod order_controller;
pub mod route_controller;
pub mod user_controller;
