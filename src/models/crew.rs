//! Modelo de Crew

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Miembro de tripulación - mapea a la tabla crew
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Crew {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
}

impl Crew {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
