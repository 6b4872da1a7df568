use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::dto::airplane_dto::AirplaneDetailResponse;
use crate::models::flight::Flight;

// Request para crear un vuelo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFlightRequest {
    pub route_id: Uuid,
    pub airplane_id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,

    #[serde(default)]
    pub crew: Vec<Uuid>,
}

// Request para actualizar un vuelo
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFlightRequest {
    pub route_id: Option<Uuid>,
    pub airplane_id: Option<Uuid>,
    pub departure_time: Option<DateTime<Utc>>,
    pub arrival_time: Option<DateTime<Utc>>,
    pub crew: Option<Vec<Uuid>>,
}

// Filtros para búsqueda de vuelos
#[derive(Debug, Deserialize)]
pub struct FlightFilters {
    pub departure_date: Option<String>,
    pub arrival_date: Option<String>,
    pub flight: Option<Uuid>,
}

// Response de vuelo para escritura
#[derive(Debug, Serialize)]
pub struct FlightResponse {
    pub id: Uuid,
    pub route_id: Uuid,
    pub airplane_id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub crew: Vec<Uuid>,
}

impl FlightResponse {
    pub fn from_flight(flight: Flight, crew: Vec<Uuid>) -> Self {
        Self {
            id: flight.id,
            route_id: flight.route_id,
            airplane_id: flight.airplane_id,
            departure_time: flight.departure_time,
            arrival_time: flight.arrival_time,
            crew,
        }
    }
}

// Proyección de list: ruta y avión resueltos a texto, con disponibilidad
// calculada a nivel de query
#[derive(Debug, Serialize, FromRow)]
pub struct FlightListResponse {
    pub id: Uuid,
    pub route: String,
    pub airplane: String,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub crew: Vec<String>,
    pub tickets_available: i64,
}

// Asiento ocupado de un vuelo
#[derive(Debug, Serialize, FromRow)]
pub struct SeatResponse {
    // `row` must be declared after other columns: the sqlx FromRow derive
    // binds a local named after each field, and a field literally named
    // `row` would otherwise shadow the `&Row` argument for later fields.
    pub seat: i32,
    pub row: i32,
}

// Proyección de retrieve: avión en detalle, mapa de asientos ocupados y
// disponibilidad calculada bajo demanda
#[derive(Debug, Serialize)]
pub struct FlightDetailResponse {
    pub id: Uuid,
    pub route: String,
    pub airplane: AirplaneDetailResponse,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
    pub crew: Vec<String>,
    pub taken_places: Vec<SeatResponse>,
    pub tickets_available: i64,
}
