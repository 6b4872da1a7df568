use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::airplane_type_controller::AirplaneTypeController;
use crate::dto::airplane_type_dto::{
    AirplaneTypeResponse, CreateAirplaneTypeRequest, UpdateAirplaneTypeRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::Principal;
use crate::middleware::permissions;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_airplane_type_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_airplane_type))
        .route("/", get(list_airplane_types))
        .route("/:id", get(get_airplane_type))
        .route("/:id", put(update_airplane_type))
        .route("/:id", delete(delete_airplane_type))
}

async fn create_airplane_type(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CreateAirplaneTypeRequest>,
) -> Result<Json<ApiResponse<AirplaneTypeResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = AirplaneTypeController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_airplane_types(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<AirplaneTypeResponse>>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = AirplaneTypeController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_airplane_type(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<AirplaneTypeResponse>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = AirplaneTypeController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_airplane_type(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAirplaneTypeRequest>,
) -> Result<Json<ApiResponse<AirplaneTypeResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = AirplaneTypeController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_airplane_type(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = AirplaneTypeController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Tipo de avión eliminado exitosamente"
    })))
}
