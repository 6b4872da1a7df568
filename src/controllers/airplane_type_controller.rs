use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::airplane_type_dto::{
    AirplaneTypeResponse, CreateAirplaneTypeRequest, UpdateAirplaneTypeRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::airplane_type_repository::AirplaneTypeRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct AirplaneTypeController {
    repository: AirplaneTypeRepository,
}

impl AirplaneTypeController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AirplaneTypeRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAirplaneTypeRequest,
    ) -> Result<ApiResponse<AirplaneTypeResponse>, AppError> {
        request.validate()?;

        let airplane_type = self.repository.create(request.name).await?;

        Ok(ApiResponse::success_with_message(
            AirplaneTypeResponse::from(airplane_type),
            "Tipo de avión creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<AirplaneTypeResponse>, AppError> {
        let airplane_types = self.repository.find_all().await?;

        Ok(airplane_types
            .into_iter()
            .map(AirplaneTypeResponse::from)
            .collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<AirplaneTypeResponse, AppError> {
        let airplane_type = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("AirplaneType", &id))?;

        Ok(AirplaneTypeResponse::from(airplane_type))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAirplaneTypeRequest,
    ) -> Result<ApiResponse<AirplaneTypeResponse>, AppError> {
        request.validate()?;

        let airplane_type = self
            .repository
            .update(id, request.name)
            .await?
            .ok_or_else(|| not_found_error("AirplaneType", &id))?;

        Ok(ApiResponse::success_with_message(
            AirplaneTypeResponse::from(airplane_type),
            "Tipo de avión actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("AirplaneType", &id));
        }

        Ok(())
    }
}
