use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::airport_controller::AirportController;
use crate::dto::airport_dto::{AirportResponse, CreateAirportRequest, UpdateAirportRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::Principal;
use crate::middleware::permissions;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_airport_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_airport))
        .route("/", get(list_airports))
        .route("/:id", get(get_airport))
        .route("/:id", put(update_airport))
        .route("/:id", delete(delete_airport))
}

async fn create_airport(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CreateAirportRequest>,
) -> Result<Json<ApiResponse<AirportResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = AirportController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_airports(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<AirportResponse>>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = AirportController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_airport(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<AirportResponse>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = AirportController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_airport(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAirportRequest>,
) -> Result<Json<ApiResponse<AirportResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = AirportController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_airport(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = AirportController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Aeropuerto eliminado exitosamente"
    })))
}
