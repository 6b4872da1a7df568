//! Modelo de AirplaneType
//!
//! Tipo de avión: referencia débil desde Airplane.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// AirplaneType - mapea a la tabla airplane_types
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AirplaneType {
    pub id: Uuid,
    pub name: String,
}
