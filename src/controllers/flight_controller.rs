use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::flight_dto::{
    CreateFlightRequest, FlightDetailResponse, FlightFilters, FlightListResponse, FlightResponse,
    UpdateFlightRequest,
};
use crate::dto::ApiResponse;
use crate::repositories::airplane_repository::AirplaneRepository;
use crate::repositories::crew_repository::CrewRepository;
use crate::repositories::flight_repository::FlightRepository;
use crate::repositories::route_repository::RouteRepository;
use crate::utils::errors::{not_found_error, AppError};
use crate::utils::validation::parse_date_param;

pub struct FlightController {
    repository: FlightRepository,
    routes: RouteRepository,
    airplanes: AirplaneRepository,
    crew: CrewRepository,
}

impl FlightController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: FlightRepository::new(pool.clone()),
            routes: RouteRepository::new(pool.clone()),
            airplanes: AirplaneRepository::new(pool.clone()),
            crew: CrewRepository::new(pool),
        }
    }

    async fn ensure_references_exist(
        &self,
        route_id: Option<Uuid>,
        airplane_id: Option<Uuid>,
        crew: Option<&[Uuid]>,
    ) -> Result<(), AppError> {
        if let Some(route_id) = route_id {
            if self.routes.find_by_id(route_id).await?.is_none() {
                return Err(not_found_error("Route", &route_id));
            }
        }

        if let Some(airplane_id) = airplane_id {
            if self.airplanes.find_by_id(airplane_id).await?.is_none() {
                return Err(not_found_error("Airplane", &airplane_id));
            }
        }

        if let Some(crew) = crew {
            if !self.crew.all_exist(crew).await? {
                return Err(AppError::NotFound(
                    "One or more crew members not found".to_string(),
                ));
            }
        }

        Ok(())
    }

    pub async fn create(
        &self,
        request: CreateFlightRequest,
    ) -> Result<ApiResponse<FlightResponse>, AppError> {
        request.validate()?;

        self.ensure_references_exist(
            Some(request.route_id),
            Some(request.airplane_id),
            Some(request.crew.as_slice()),
        )
        .await?;

        let flight = self
            .repository
            .create(
                request.route_id,
                request.airplane_id,
                request.departure_time,
                request.arrival_time,
                &request.crew,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            FlightResponse::from_flight(flight, request.crew),
            "Vuelo creado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, filters: FlightFilters) -> Result<Vec<FlightListResponse>, AppError> {
        let departure_date = filters
            .departure_date
            .as_deref()
            .map(|value| parse_date_param("departure_date", value))
            .transpose()?;

        let arrival_date = filters
            .arrival_date
            .as_deref()
            .map(|value| parse_date_param("arrival_date", value))
            .transpose()?;

        self.repository
            .list(departure_date, arrival_date, filters.flight)
            .await
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<FlightDetailResponse, AppError> {
        let header = self
            .repository
            .find_header(id)
            .await?
            .ok_or_else(|| not_found_error("Flight", &id))?;

        let airplane = self
            .airplanes
            .find_detail(header.airplane_id)
            .await?
            .ok_or_else(|| {
                AppError::Internal(format!("Airplane missing for flight '{}'", header.id))
            })?;

        let crew = self.repository.crew_names(id).await?;
        let taken_places = self.repository.taken_seats(id).await?;
        let tickets_available = self
            .repository
            .available_seats(id)
            .await?
            .unwrap_or_default();

        Ok(FlightDetailResponse {
            id: header.id,
            route: header.route,
            airplane,
            departure_time: header.departure_time,
            arrival_time: header.arrival_time,
            crew,
            taken_places,
            tickets_available,
        })
    }

    pub async fn update(
        &self,
        id: Uuid,
        request: UpdateFlightRequest,
    ) -> Result<ApiResponse<FlightResponse>, AppError> {
        request.validate()?;

        self.ensure_references_exist(
            request.route_id,
            request.airplane_id,
            request.crew.as_deref(),
        )
        .await?;

        let flight = self
            .repository
            .update(
                id,
                request.route_id,
                request.airplane_id,
                request.departure_time,
                request.arrival_time,
                request.crew,
            )
            .await?
            .ok_or_else(|| not_found_error("Flight", &id))?;

        let crew = self.repository.crew_ids(id).await?;

        Ok(ApiResponse::success_with_message(
            FlightResponse::from_flight(flight, crew),
            "Vuelo actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        if !self.repository.delete(id).await? {
            return Err(not_found_error("Flight", &id));
        }

        Ok(())
    }
}
