use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::airplane_type::AirplaneType;

// Request para crear un tipo de avión
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirplaneTypeRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
}

// Request para actualizar un tipo de avión
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAirplaneTypeRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,
}

// Response de tipo de avión
#[derive(Debug, Serialize)]
pub struct AirplaneTypeResponse {
    pub id: Uuid,
    pub name: String,
}

impl From<AirplaneType> for AirplaneTypeResponse {
    fn from(airplane_type: AirplaneType) -> Self {
        Self {
            id: airplane_type.id,
            name: airplane_type.name,
        }
    }
}
