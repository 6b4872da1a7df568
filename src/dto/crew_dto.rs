use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::crew::Crew;

// Request para crear un miembro de tripulación
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCrewRequest {
    #[validate(length(min = 1, max = 128))]
    pub first_name: String,

    #[validate(length(min = 1, max = 128))]
    pub last_name: String,
}

// Request para actualizar un miembro de tripulación
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCrewRequest {
    #[validate(length(min = 1, max = 128))]
    pub first_name: Option<String>,

    #[validate(length(min = 1, max = 128))]
    pub last_name: Option<String>,
}

// Response de tripulación con el nombre completo calculado
#[derive(Debug, Serialize)]
pub struct CrewResponse {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
}

impl From<Crew> for CrewResponse {
    fn from(crew: Crew) -> Self {
        let full_name = crew.full_name();
        Self {
            id: crew.id,
            first_name: crew.first_name,
            last_name: crew.last_name,
            full_name,
        }
    }
}
