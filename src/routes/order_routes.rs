use axum::{
    extract::{Path, Query, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::order_controller::OrderController;
use crate::dto::order_dto::{
    CreateOrderRequest, OrderDetailResponse, OrderFilters, OrderResponse,
};
use crate::dto::ApiResponse;
use crate::middleware::auth::Principal;
use crate::middleware::permissions;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/", get(list_orders))
        .route("/:id", get(get_order))
}

async fn create_order(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<ApiResponse<OrderResponse>>, AppError> {
    let user = permissions::require_authenticated(&principal)?;
    let controller = OrderController::new(state.pool.clone());
    let response = controller.create(user, request).await?;
    Ok(Json(response))
}

async fn list_orders(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Query(filters): Query<OrderFilters>,
) -> Result<Json<Vec<OrderResponse>>, AppError> {
    let user = permissions::require_authenticated(&principal)?;
    let controller = OrderController::new(state.pool.clone());
    let response = controller.list(user, filters).await?;
    Ok(Json(response))
}

async fn get_order(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
    Path(id): Path<Uuid>,
) -> Result<Json<OrderDetailResponse>, AppError> {
    let user = permissions::require_authenticated(&principal)?;
    let controller = OrderController::new(state.pool.clone());
    let response = controller.get_by_id(user, id).await?;
    Ok(Json(response))
}
