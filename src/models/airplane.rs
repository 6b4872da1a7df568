//! Modelo de Airplane
//!
//! Un avión define la geometría de asientos de sus vuelos:
//! filas x asientos por fila.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Airplane - mapea a la tabla airplanes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Airplane {
    pub id: Uuid,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type_id: Option<Uuid>,
}

impl Airplane {
    /// Capacidad total del avión
    pub fn capacity(&self) -> i32 {
        self.rows * self.seats_in_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity() {
        let airplane = Airplane {
            id: Uuid::new_v4(),
            name: "Boeing 737".to_string(),
            rows: 10,
            seats_in_row: 6,
            airplane_type_id: None,
        };
        assert_eq!(airplane.capacity(), 60);
    }
}
