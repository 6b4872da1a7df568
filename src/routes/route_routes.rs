use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::route_controller::RouteController;
use crate::dto::route_dto::{
    CreateRouteRequest, RouteDetailResponse, RouteFilters, RouteListResponse, RouteResponse,
    UpdateRouteRequest,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::Principal;
use crate::middleware::permissions;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_route_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_route))
        .route("/", get(list_routes))
        .route("/:id", get(get_route))
        .route("/:id", put(update_route))
        .route("/:id", delete(delete_route))
}

async fn create_route(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CreateRouteRequest>,
) -> Result<Json<ApiResponse<RouteResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = RouteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_routes(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Query(filters): Query<RouteFilters>,
) -> Result<Json<Vec<RouteListResponse>>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = RouteController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_route(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<RouteDetailResponse>, AppError> {
    permissions::require_authenticated(&principal)?;
    let controller = RouteController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_route(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateRouteRequest>,
) -> Result<Json<ApiResponse<RouteResponse>>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = RouteController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_route(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    permissions::require_staff(&principal)?;
    let controller = RouteController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Ruta eliminada exitosamente"
    })))
}
