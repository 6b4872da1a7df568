//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del sistema
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use uuid::Uuid;

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    // Mismo mensaje de límites que valida el dominio de asientos
    #[error("Row must be in range: (1, {max_rows}), seat must be in range: (1, {max_seats})")]
    OutOfRange {
        ticket_index: Option<usize>,
        max_rows: i32,
        max_seats: i32,
    },

    #[error("Seat (row: {row}, seat: {seat}) is already taken for flight {flight_id}")]
    SeatTaken {
        flight_id: Uuid,
        row: i32,
        seat: i32,
    },

    #[error("An order must contain at least one ticket")]
    EmptyOrder,

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("JWT error: {0}")]
    Jwt(String),

    #[error("Hash error: {0}")]
    Hash(String),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::Database(e) => {
                eprintln!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Database Error".to_string(),
                        message: "An error occurred while accessing the database".to_string(),
                        details: Some(json!({ "sql_error": e.to_string() })),
                        code: Some("DB_ERROR".to_string()),
                    },
                )
            }

            AppError::Validation(e) => {
                eprintln!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::Unauthorized(msg) => {
                eprintln!("Unauthorized access: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        error: "Unauthorized".to_string(),
                        message: msg,
                        details: None,
                        code: Some("UNAUTHORIZED".to_string()),
                    },
                )
            }

            AppError::Forbidden(msg) => {
                eprintln!("Forbidden access: {}", msg);
                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse {
                        error: "Forbidden".to_string(),
                        message: msg,
                        details: None,
                        code: Some("FORBIDDEN".to_string()),
                    },
                )
            }

            AppError::NotFound(msg) => {
                eprintln!("Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message: msg,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::Conflict(msg) => {
                eprintln!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message: msg,
                        details: None,
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                eprintln!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::OutOfRange {
                ticket_index,
                max_rows,
                max_seats,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Out Of Range".to_string(),
                    message: format!(
                        "Row must be in range: (1, {}), seat must be in range: (1, {})",
                        max_rows, max_seats
                    ),
                    details: Some(json!({
                        "ticket_index": ticket_index,
                        "row_range": [1, max_rows],
                        "seat_range": [1, max_seats],
                    })),
                    code: Some("OUT_OF_RANGE".to_string()),
                },
            ),

            AppError::SeatTaken {
                flight_id,
                row,
                seat,
            } => (
                StatusCode::CONFLICT,
                ErrorResponse {
                    error: "Seat Taken".to_string(),
                    message: format!(
                        "Seat (row: {}, seat: {}) is already taken for flight {}",
                        row, seat, flight_id
                    ),
                    details: Some(json!({
                        "flight_id": flight_id,
                        "row": row,
                        "seat": seat,
                    })),
                    code: Some("SEAT_TAKEN".to_string()),
                },
            ),

            AppError::EmptyOrder => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Empty Order".to_string(),
                    message: "An order must contain at least one ticket".to_string(),
                    details: None,
                    code: Some("EMPTY_ORDER".to_string()),
                },
            ),

            AppError::Internal(msg) => {
                eprintln!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Internal Server Error".to_string(),
                        message: "An unexpected error occurred".to_string(),
                        details: Some(json!({ "internal_error": msg })),
                        code: Some("INTERNAL_ERROR".to_string()),
                    },
                )
            }

            AppError::Jwt(msg) => {
                eprintln!("JWT error: {}", msg);
                (
                    StatusCode::UNAUTHORIZED,
                    ErrorResponse {
                        error: "JWT Error".to_string(),
                        message: msg,
                        details: None,
                        code: Some("JWT_ERROR".to_string()),
                    },
                )
            }

            AppError::Hash(msg) => {
                eprintln!("Hash error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Hash Error".to_string(),
                        message: "An error occurred while processing credentials".to_string(),
                        details: Some(json!({ "hash_error": msg })),
                        code: Some("HASH_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(resource: &str, id: &Uuid) -> AppError {
    AppError::NotFound(format!("{} with id '{}' not found", resource, id))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_order_maps_to_bad_request() {
        let response = AppError::EmptyOrder.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_seat_taken_maps_to_conflict() {
        let error = AppError::SeatTaken {
            flight_id: Uuid::new_v4(),
            row: 5,
            seat: 3,
        };
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn test_out_of_range_maps_to_bad_request() {
        let error = AppError::OutOfRange {
            ticket_index: Some(0),
            max_rows: 10,
            max_seats: 6,
        };
        assert_eq!(
            error.to_string(),
            "Row must be in range: (1, 10), seat must be in range: (1, 6)"
        );
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_forbidden_maps_to_403() {
        let response = AppError::Forbidden("no".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_not_found_helper_includes_resource_and_id() {
        let id = Uuid::new_v4();
        let error = not_found_error("Flight", &id);
        assert!(error.to_string().contains("Flight"));
        assert!(error.to_string().contains(&id.to_string()));
    }
}
