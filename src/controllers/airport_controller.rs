use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::airport_dto::{AirportResponse, CreateAirportRequest, UpdateAirportRequest};
use crate::dto::ApiResponse;
use crate::repositories::airport_repository::AirportRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::require_non_blank;

pub struct AirportController {
    repository: AirportRepository,
}

impl AirportController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AirportRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateAirportRequest,
    ) -> Result<ApiResponse<AirportResponse>, AppError> {
        request.validate()?;
        require_non_blank("name", &request.name)?;
        require_non_blank("closest_big_city", &request.closest_big_city)?;

        let airport = self
            .repository
            .create(request.name, request.closest_big_city)
            .await?;

        Ok(ApiResponse::success_with_message(
            AirportResponse::from(airport),
            "Aeropuerto creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<AirportResponse>, AppError> {
        let airports = self.repository.find_all().await?;

        Ok(airports.into_iter().map(AirportResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<AirportResponse, AppError> {
        let airport = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Airport", &id))?;

        Ok(AirportResponse::from(airport))
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAirportRequest,
    ) -> Result<ApiResponse<AirportResponse>, AppError> {
        request.validate()?;

        let airport = self
            .repository
            .update(id, request.name, request.closest_big_city)
            .await?
            .ok_or_else(|| not_found_error("Airport", &id))?;

        Ok(ApiResponse::success_with_message(
            AirportResponse::from(airport),
            "Aeropuerto actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Airport", &id));
        }

        Ok(())
    }
}
