use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::airport::Airport;

// Request para crear un aeropuerto
#[derive(Debug, Deserialize, Validate)]
pub struct CreateAirportRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(length(min = 1, max = 128))]
    pub closest_big_city: String,
}

// Request para actualizar un aeropuerto
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateAirportRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 128))]
    pub closest_big_city: Option<String>,
}

// Response de aeropuerto
#[derive(Debug, Serialize)]
pub struct AirportResponse {
    pub id: Uuid,
    pub name: String,
    pub closest_big_city: String,
}

impl From<Airport> for AirportResponse {
    fn from(airport: Airport) -> Self {
        Self {
            id: airport.id,
            name: airport.name,
            closest_big_city: airport.closest_big_city,
        }
    }
}
