//! Modelo de Flight

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Flight - mapea a la tabla flights
///
/// La tripulación asignada vive en la tabla intermedia flight_crew.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Flight {
    pub id: Uuid,
    pub route_id: Uuid,
    pub airplane_id: Uuid,
    pub departure_time: DateTime<Utc>,
    pub arrival_time: DateTime<Utc>,
}
