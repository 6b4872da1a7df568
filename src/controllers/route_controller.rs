use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::airport_dto::AirportResponse;
use crate::dto::route_dto::{
    CreateRouteRequest, RouteDetailResponse, RouteFilters, RouteListResponse, RouteResponse,
    UpdateRouteRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::airport_repository::AirportRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::{not_found_error, AppError};

pub struct RouteController {
    repository: RouteRepository,
    airports: AirportRepository,
}

impl RouteController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: RouteRepository::new(pool.clone()),
            airports: AirportRepository::new(pool),
        }
    }

    async fn ensure_airport_exists(&self, id: Uuid) -> Result<(), AppError> {
        if self.airports.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Airport", &id));
        }
        Ok(())
    }

    pub async fn create(
        &self,
        request: CreateRouteRequest,
    ) -> Result<ApiResponse<RouteResponse>, AppError> {
        request.validate()?;

        self.ensure_airport_exists(request.source_id).await?;
        self.ensure_airport_exists(request.destination_id).await?;

        let route = self
            .repository
            .create(
                request.source_id,
                request.destination_id,
                request.distance,
                request.measurement_unit,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            RouteResponse::from(route),
            "Ruta creada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, filters: RouteFilters) -> Result<Vec<RouteListResponse>, AppError> {
        self.repository.list(filters.source, filters.destination).await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<RouteDetailResponse, AppError> {
        let detail = self
            .repository
            .find_detail(id)
            .await?
            .ok_or_else(|| not_found_error("Route", &id))?;

        Ok(RouteDetailResponse {
            id: detail.id,
            source: AirportResponse {
                id: detail.source_id,
                name: detail.source_name,
                closest_big_city: detail.source_city,
            },
            destination: AirportResponse {
                id: detail.destination_id,
                name: detail.destination_name,
                closest_big_city: detail.destination_city,
            },
            distance: detail.distance,
            measurement_unit: detail.measurement_unit,
        })
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateRouteRequest,
    ) -> Result<ApiResponse<RouteResponse>, AppError> {
        request.validate()?;

        if let Some(source_id) = request.source_id {
            self.ensure_airport_exists(source_id).await?;
        }
        if let Some(destination_id) = request.destination_id {
            self.ensure_airport_exists(destination_id).await?;
        }

        let route = self
            .repository
            .update(
                id,
                request.source_id,
                request.destination_id,
                request.distance,
                request.measurement_unit,
            )
            .await?
            .ok_or_else(|| not_found_error("Route", &id))?;

        Ok(ApiResponse::success_with_message(
            RouteResponse::from(route),
            "Ruta actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Route", &id));
        }

        Ok(())
    }
}
