use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::airplane::Airplane;

// Request para crear un avión
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirplaneRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(range(min = 1))]
    pub rows: i32,

    #[validate(range(min = 1))]
    pub seats_in_row: i32,

    pub airplane_type_id: Option<Uuid>,
}

// Request para actualizar un avión
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAirplaneRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,

    #[validate(range(min = 1))]
    pub rows: Option<i32>,

    #[validate(range(min = 1))]
    pub seats_in_row: Option<i32>,

    pub airplane_type_id: Option<Uuid>,
}

// Response de avión para listados y escritura
#[derive(Debug, Serialize)]
pub struct AirplaneResponse {
    pub id: Uuid,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type_id: Option<Uuid>,
    pub capacity: i32,
}

impl From<Airplane> for AirplaneResponse {
    fn from(airplane: Airplane) -> Self {
        let capacity = airplane.capacity();
        Self {
            id: airplane.id,
            name: airplane.name,
            rows: airplane.rows,
            seats_in_row: airplane.seats_in_row,
            airplane_type_id: airplane.airplane_type_id,
            capacity,
        }
    }
}

// Proyección de retrieve: resuelve el nombre del tipo de avión
#[derive(Debug, Serialize, FromRow)]
pub struct AirplaneDetailResponse {
    pub id: Uuid,
    pub name: String,
    pub rows: i32,
    pub seats_in_row: i32,
    pub airplane_type: Option<String>,
    pub capacity: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_airplane_response_computes_capacity() {
        let airplane = Airplane {
            id: Uuid::new_v4(),
            name: "Airplane Z".to_string(),
            rows: 8,
            seats_in_row: 6,
            airplane_type_id: None,
        };
        let response = AirplaneResponse::from(airplane);
        assert_eq!(response.capacity, 48);
    }
}
