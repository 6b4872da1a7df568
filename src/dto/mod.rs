//! DTOs de la API
//!
//! Requests y responses por recurso. Cada operación de lectura tiene su
//! proyección con nombre (list vs retrieve) elegida por el handler.

pub mod airplane_dto;
pub mod airplane_type_dto;
pub mod airport_dto;
pub mod crew_dto;
pub mod flight_dto;
pub mod order_dto;
pub mod route_dto;
pub mod user_dto;

use serde::Serialize;

/// Response genérica
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
