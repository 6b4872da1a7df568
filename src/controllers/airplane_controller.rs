use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::airplane_dto::{
    AirplaneDetailResponse, AirplaneResponse, CreateAirplaneRequest, UpdateAirplaneRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::airplane_repository::AirplaneRepository;
use crate::repositories::airplane_type_repository::AirplaneTypeRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct AirplaneController {
    repository: AirplaneRepository,
    airplane_types: AirplaneTypeRepository,
}

impl AirplaneController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: AirplaneRepository::new(pool.clone()),
            airplane_types: AirplaneTypeRepository::new(pool),
        }
    }

    async fn ensure_airplane_type_exists(&self, id: Uuid) -> Result<(), AppError> {
        if self.airplane_types.find_by_id(id).await?.is_none() {
            return Err(not_found_error("AirplaneType", &id));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        request: CreateAirplaneRequest,
    ) -> Result<ApiResponse<AirplaneResponse>, AppError> {
        request.validate()?;

        if let Some(airplane_type_id) = request.airplane_type_id {
            self.ensure_airplane_type_exists(airplane_type_id).await?;
        }

        let airplane = self
            .repository
            .create(
                request.name,
                request.rows,
                request.seats_in_row,
                request.airplane_type_id,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            AirplaneResponse::from(airplane),
            "Avión creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self) -> Result<Vec<AirplaneResponse>, AppError> {
        let airplanes = self.repository.find_all().await?;

        Ok(airplanes.into_iter().map(AirplaneResponse::from).collect())
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<AirplaneDetailResponse, AppError> {
        let detail = self
            .repository
            .find_detail(id)
            .await?
            .ok_or_else(|| not_found_error("Airplane", &id))?;

        Ok(detail)
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateAirplaneRequest,
    ) -> Result<ApiResponse<AirplaneResponse>, AppError> {
        request.validate()?;

        if let Some(airplane_type_id) = request.airplane_type_id {
            self.ensure_airplane_type_exists(airplane_type_id).await?;
        }

        let airplane = self
            .repository
            .update(
                id,
                request.name,
                request.rows,
                request.seats_in_row,
                request.airplane_type_id,
            )
            .await?
            .ok_or_else(|| not_found_error("Airplane", &id))?;

        Ok(ApiResponse::success_with_message(
            AirplaneResponse::from(airplane),
            "Avión actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Airplane", &id));
        }

        Ok(())
    }
}
