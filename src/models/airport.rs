//! Modelo de Airport

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Airport - mapea a la tabla airports
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Airport {
    pub id: Uuid,
    pub name: String,
    pub closest_big_city: String,
}
