use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::airplane_controller::AirplaneController;
use crate::dto::airplane_dto::{
    AirplaneDetailResponse, AirplaneResponse, CreateAirplaneRequest, UpdateAirplaneRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::Principal;
use crate::middleware::permissions;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_airplane_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_airplane))
        .route("/", get(list_airplanes))
        .route("/:id", get(get_airplane))
        .route("/:id", put(update_airplane))
        .route("/:id", delete(delete_airplane))
}

async fn create_airplane(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CreateAirplaneRequest>,
) -> Result<Json<ApiResponse<AirplaneResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = AirplaneController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_airplanes(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<AirplaneResponse>>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = AirplaneController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_airplane(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<AirplaneDetailResponse>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = AirplaneController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_airplane(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateAirplaneRequest>,
) -> Result<Json<ApiResponse<AirplaneResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = AirplaneController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_airplane(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = AirplaneController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Avión eliminado exitosamente"
    })))
}
