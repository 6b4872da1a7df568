//! Middleware del sistema
//!
//! Este módulo contiene el middleware de autenticación, la política de
//! permisos y la configuración de CORS.

pub mod auth;
pub mod cors;
pub mod permissions;
