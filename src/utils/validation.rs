//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de parámetros
//! de query y conversión de tipos.

use chrono::NaiveDate;

use crate::utils::errors::AppError;

/// Validar y convertir un parámetro de query a fecha
pub fn parse_date_param(field: &str, value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest(format!(
            "Invalid value '{}' for '{}': expected format YYYY-MM-DD",
            value, field
        ))
    })
}

/// Validar que un campo de texto no esté en blanco
pub fn require_non_blank(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::BadRequest(format!("'{}' must not be blank", field)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_param() {
        let date = parse_date_param("departure_date", "2023-11-01").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2023, 11, 1).unwrap());
    }

    #[test]
    fn test_parse_date_param_rejects_garbage() {
        assert!(parse_date_param("departure_date", "01/11/2023").is_err());
        assert!(parse_date_param("departure_date", "not-a-date").is_err());
    }

    #[test]
    fn test_require_non_blank() {
        assert!(require_non_blank("name", "Heathrow").is_ok());
        assert!(require_non_blank("name", "   ").is_err());
    }
}
