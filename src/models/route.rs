//! Modelo de Route
//!
//! Una ruta une dos aeropuertos con una distancia medida en km o millas.

use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Unidad de medida de la distancia - mapea al ENUM measurement_unit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "measurement_unit", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum MeasurementUnit {
    Km,
    Miles,
}

impl Default for MeasurementUnit {
    fn default() -> Self {
        MeasurementUnit::Km
    }
}

/// Route - mapea a la tabla routes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Route {
    pub id: Uuid,
    pub source_id: Uuid,
    pub destination_id: Uuid,
    pub distance: i32,
    pub measurement_unit: MeasurementUnit,
}
