//! Modelo de Ticket
//!
//! Un ticket reserva un asiento (row, seat) de un vuelo. La unicidad por
//! vuelo la garantiza el índice único de la tabla; aquí solo se valida la
//! geometría contra el avión.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::airplane::Airplane;
use crate::utils::errors::AppError;

/// Ticket - mapea a la tabla tickets
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Ticket {
    pub id: Uuid,
    pub flight_id: Uuid,
    pub order_id: Uuid,
    pub seat: i32,
    // Declared last so the sqlx FromRow derive's per-field binding for `row`
    // does not shadow the `&Row` argument used by the preceding fields.
    pub row: i32,
}

impl Ticket {
    /// Validar que (row, seat) cae dentro de la geometría del avión.
    ///
    /// Predicado puro: no consulta el estado de reservas. La unicidad del
    /// asiento se comprueba transaccionalmente al insertar.
    pub fn validate_seat(row: i32, seat: i32, airplane: &Airplane) -> Result<(), AppError> {
        if !(1 <= row && row <= airplane.rows) || !(1 <= seat && seat <= airplane.seats_in_row) {
            return Err(AppError::OutOfRange {
                ticket_index: None,
                max_rows: airplane.rows,
                max_seats: airplane.seats_in_row,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn airplane(rows: i32, seats_in_row: i32) -> Airplane {
        Airplane {
            id: Uuid::new_v4(),
            name: "Airplane C".to_string(),
            rows,
            seats_in_row,
            airplane_type_id: None,
        }
    }

    #[test]
    fn test_valid_seats_within_bounds() {
        let plane = airplane(10, 6);
        assert!(Ticket::validate_seat(1, 1, &plane).is_ok());
        assert!(Ticket::validate_seat(10, 6, &plane).is_ok());
        assert!(Ticket::validate_seat(5, 3, &plane).is_ok());
    }

    #[test]
    fn test_row_out_of_bounds() {
        let plane = airplane(10, 6);

        let error = Ticket::validate_seat(11, 1, &plane).unwrap_err();
        match error {
            AppError::OutOfRange {
                max_rows, max_seats, ..
            } => {
                assert_eq!(max_rows, 10);
                assert_eq!(max_seats, 6);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_row_eleven_reports_bounds_one_to_ten() {
        let plane = airplane(10, 6);
        let error = Ticket::validate_seat(11, 1, &plane).unwrap_err();
        assert_eq!(
            error.to_string(),
            "Row must be in range: (1, 10), seat must be in range: (1, 6)"
        );
    }

    #[test]
    fn test_seat_out_of_bounds() {
        let plane = airplane(10, 6);
        assert!(Ticket::validate_seat(1, 7, &plane).is_err());
    }

    #[test]
    fn test_zero_and_negative_rejected() {
        let plane = airplane(10, 6);
        assert!(Ticket::validate_seat(0, 1, &plane).is_err());
        assert!(Ticket::validate_seat(1, 0, &plane).is_err());
        assert!(Ticket::validate_seat(-3, 2, &plane).is_err());
    }
}
