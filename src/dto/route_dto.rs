use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::dto::airport_dto::AirportResponse;
use crate::models::route::{MeasurementUnit, Route};

// Request para crear una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct CreateRouteRequest {
    pub source_id: Uuid,
    pub destination_id: Uuid,

    #[validate(range(min = 1))]
    pub distance: i32,

    #[serde(default)]
    pub measurement_unit: MeasurementUnit,
}

// Request para actualizar una ruta
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateRouteRequest {
    pub source_id: Option<Uuid>,
    pub destination_id: Option<Uuid>,

    #[validate(range(min = 1))]
    pub distance: Option<i32>,

    pub measurement_unit: Option<MeasurementUnit>,
}

// Filtros para búsqueda de rutas
#[derive(Debug, Deserialize)]
pub struct RouteFilters {
    pub source: Option<String>,
    pub destination: Option<String>,
}

// Response de ruta para escritura
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    pub id: Uuid,
    pub source_id: Uuid,
    pub destination_id: Uuid,
    pub distance: i32,
    pub measurement_unit: MeasurementUnit,
}

impl From<Route> for RouteResponse {
    fn from(route: Route) -> Self {
        Self {
            id: route.id,
            source_id: route.source_id,
            destination_id: route.destination_id,
            distance: route.distance,
            measurement_unit: route.measurement_unit,
        }
    }
}

// Proyección de list: aeropuertos resueltos a su nombre
#[derive(Debug, Serialize, FromRow)]
pub struct RouteListResponse {
    pub id: Uuid,
    pub source: String,
    pub destination: String,
    pub distance: i32,
    pub measurement_unit: MeasurementUnit,
}

// Proyección de retrieve: aeropuertos anidados
#[derive(Debug, Serialize)]
pub struct RouteDetailResponse {
    pub id: Uuid,
    pub source: AirportResponse,
    pub destination: AirportResponse,
    pub distance: i32,
    pub measurement_unit: MeasurementUnit,
}
