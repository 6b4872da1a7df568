use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::flight_controller::FlightController;
use crate::dto::flight_dto::{
    CreateFlightRequest, FlightDetailResponse, FlightFilters, FlightListResponse, FlightResponse,
    UpdateFlightRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::Principal;
use crate::middleware::permissions;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_flight_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_flight))
        .route("/", get(list_flights))
        .route("/:id", get(get_flight))
        .route("/:id", put(update_flight))
        .route("/:id", delete(delete_flight))
}

async fn create_flight(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CreateFlightRequest>,
) -> Result<Json<ApiResponse<FlightResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = FlightController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_flights(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Query(filters): Query<FlightFilters>,
) -> Result<Json<Vec<FlightListResponse>>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = FlightController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_flight(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<FlightDetailResponse>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = FlightController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_flight(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFlightRequest>,
) -> Result<Json<ApiResponse<FlightResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = FlightController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_flight(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = FlightController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Vuelo eliminado exitosamente"
    })))
}
