use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::crew_controller::CrewController;
use crate::dto::crew_dto::{CreateCrewRequest, CrewResponse, UpdateCrewRequest};
use crate::dto::ApiResponse;
use crate::middleware::auth::Principal;
use crate::middleware::permissions;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_crew_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_crew))
        .route("/", get(list_crew))
        .route("/:id", get(get_crew))
        .route("/:id", put(update_crew))
        .route("/:id", delete(delete_crew))
}

async fn create_crew(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CreateCrewRequest>,
) -> Result<Json<ApiResponse<CrewResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = CrewController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_crew(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<Vec<CrewResponse>>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = CrewController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn get_crew(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<CrewResponse>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = CrewController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_crew(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCrewRequest>,
) -> Result<Json<ApiResponse<CrewResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = CrewController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_crew(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = CrewController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Miembro de tripulación eliminado exitosamente"
    })))
}
