use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::crew_dto::{CreateCrewRequest, CrewResponse, UpdateCrewRequest};
use crate::dto::ApiResponse;
use crate::repositories::crew_repository::CrewRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct CrewController {
    repository: CrewRepository,
}

impl CrewController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CrewRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateCrewRequest,
    ) -> Result<ApiResponse<CrewResponse>, AppError> {
        request.validate()?;

        let crew = self
            .repository
            .create(request.first_name, request.last_name)
            .await?;

        Ok(ApiResponse::success_with_message(
            CrewResponse::from(crew),
            "Miembro de tripulación creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<CrewResponse>, AppError> {
        let crew = self.repository.find_all().await?;

        Ok(crew.into_iter().map(CrewResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<CrewResponse, AppError> {
        let crew = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Crew", &id))?;

        Ok(CrewResponse::from(crew))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateCrewRequest,
    ) -> Result<ApiResponse<CrewResponse>, AppError> {
        request.validate()?;

        let crew = self
            .repository
            .update(id, request.first_name, request.last_name)
            .await?
            .ok_or_else(|| not_found_error("Crew", &id))?;

        Ok(ApiResponse::success_with_message(
            CrewResponse::from(crew),
            "Miembro de tripulación actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Crew", &id));
        }

        Ok(())
    }
}
