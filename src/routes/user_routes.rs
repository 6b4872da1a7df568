use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::user_controller::UserController;
use crate::dto::user_dto::{LoginRequest, LoginResponse, RegisterUserRequest, UserResponse};
use crate::dto::ApiResponse;
use crate::middleware::auth::Principal;
use crate::middleware::permissions;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::JwtConfig;

pub fn create_user_router() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
}

async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterUserRequest>,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let response = controller.register(request).await?;
    Ok(Json(response))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = UserController::new(state.pool.clone());
    let jwt_config = JwtConfig::from(&state.config);
    let response = controller.login(request, &jwt_config).await?;
    Ok(Json(response))
}

async fn me(
    State(state): State<AppState>,
    Extension(principal): Extension<Principal>,
) -> Result<Json<UserResponse>, AppError> {
    let user = permissions::require_authenticated(&principal)?;
    let controller = UserController::new(state.pool.clone());
    let response = controller.me(user.user_id).await?;
    Ok(Json(response))
}
